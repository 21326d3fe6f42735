// src/models.rs

pub mod comissao;
pub mod venda;
