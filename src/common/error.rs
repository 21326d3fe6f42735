// src/common/error.rs

use thiserror::Error;

/// Erro da fronteira estrita de importação (linhas persistidas / ERP).
///
/// As operações de cálculo nunca retornam erro: entrada malformada degrada
/// para zero no menor escopo possível. Este tipo existe só para os
/// construtores `de_json`, onde uma linha corrompida no armazenamento é um
/// problema do chamador e deve aparecer como `Err`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("registro JSON inválido: {0}")]
    JsonInvalido(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
