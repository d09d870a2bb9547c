//! Client record type

use serde::{Deserialize, Serialize};

/// A client of the installation company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Store-assigned identifier
    pub id: u64,
    /// Full name or company name
    pub name: String,
    /// CPF (person) or CNPJ (company) tax id, stored as typed in
    pub cpf_cnpj: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
