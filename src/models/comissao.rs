// src/models/comissao.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::error::Result;
use crate::common::num::ValorFlex;

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoCorretor {
    Interno,
    Externo,
}

// --- STRUCTS ---

/// Regra de comissão de um cargo dentro de um empreendimento: que percentual
/// do valor da venda aquele cargo recebe, e para que tipo de corretor vale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComissaoCargo {
    pub cargo_id: Uuid,
    pub nome_cargo: String,
    pub tipo_corretor: TipoCorretor,
    /// Percentual vindo da tela de configuração; pode chegar como string.
    #[serde(default)]
    pub percentual: ValorFlex,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Empreendimento {
    pub id: Uuid,
    /// Tabela de comissões do empreendimento; ausente = vazia.
    #[serde(default)]
    pub comissoes: Vec<ComissaoCargo>,
}

impl Empreendimento {
    /// Fronteira estrita de importação, igual à de `Venda::de_json`.
    pub fn de_json(texto: &str) -> Result<Empreendimento> {
        Ok(serde_json::from_str(texto)?)
    }
}

/// Uma linha da quebra de comissões calculada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComissaoCalculada {
    pub cargo_id: Uuid,
    pub nome_cargo: String,
    pub percentual: Decimal,
    pub valor: Decimal,
}

/// Saída de `calcular_comissoes_dinamicas`. Empreendimento desconhecido ou
/// sem cargos do tipo pedido produz o resumo vazio (tudo zero), não erro.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumoComissoes {
    pub por_cargo: Vec<ComissaoCalculada>,
    pub valor_total: Decimal,
    pub percentual_total: Decimal,
}
