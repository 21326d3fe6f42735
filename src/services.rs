// src/services.rs

pub mod comissoes;
pub mod pro_soluto;
