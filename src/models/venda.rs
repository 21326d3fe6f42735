// src/models/venda.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::common::error::Result;
use crate::common::num::ValorFlex;

// --- ENUMS ---

/// Situação dos balões (parcelas intermediárias) de uma venda.
///
/// No formulário o campo é texto livre; só o valor exato "sim" habilita o
/// componente de balão no pró-soluto. "nao", "pendente" ou qualquer outra
/// coisa contam zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusBalao {
    Sim,
    Nao,
    Pendente,
    /// Valor desconhecido ou ausente vindo do formulário.
    #[default]
    Indefinido,
}

impl<'de> Deserialize<'de> for StatusBalao {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Comparação exata, sem trim nem case-folding: é assim que as linhas
        // antigas foram gravadas e interpretadas.
        let bruto = Value::deserialize(deserializer)?;
        Ok(match bruto.as_str() {
            Some("sim") => StatusBalao::Sim,
            Some("nao") | Some("não") => StatusBalao::Nao,
            Some("pendente") => StatusBalao::Pendente,
            _ => StatusBalao::Indefinido,
        })
    }
}

// O front-end às vezes manda null onde se espera bool; null e qualquer outro
// não-bool contam como false.
fn bool_tolerante<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_bool().unwrap_or(false))
}

// --- STRUCTS ---

/// Estrutura de pagamento de uma venda, como chega do formulário ou da
/// importação. Todo campo é opcional: ausente e inválido são tratados igual.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Venda {
    #[serde(deserialize_with = "bool_tolerante")]
    pub teve_sinal: bool,
    pub valor_sinal: ValorFlex,

    #[serde(deserialize_with = "bool_tolerante")]
    pub teve_entrada: bool,
    #[serde(deserialize_with = "bool_tolerante")]
    pub entrada_parcelada: bool,

    /// Valor da entrada quando paga à vista.
    pub valor_entrada: ValorFlex,

    // Campos de fallback usados quando a venda veio do armazenamento antigo,
    // que achatava o parcelamento em quantidade × valor.
    pub qtd_parcelas_entrada: ValorFlex,
    pub valor_parcela_entrada: ValorFlex,

    pub status_balao: StatusBalao,
    pub qtd_baloes: ValorFlex,
    pub valor_balao: ValorFlex,
}

impl Venda {
    /// Fronteira estrita de importação: falha se o texto não for um objeto
    /// JSON. Campos individuais continuam tolerantes.
    pub fn de_json(texto: &str) -> Result<Venda> {
        Ok(serde_json::from_str(texto)?)
    }
}

/// Uma faixa de um plano de pagamento escalonado ("5 parcelas de 2000").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GrupoParcelas {
    pub quantidade: ValorFlex,
    pub valor: ValorFlex,
}

impl GrupoParcelas {
    pub fn new(quantidade: impl Into<ValorFlex>, valor: impl Into<ValorFlex>) -> Self {
        Self {
            quantidade: quantidade.into(),
            valor: valor.into(),
        }
    }

    /// quantidade × valor, com coerção permissiva dos dois lados.
    pub fn subtotal(&self) -> Decimal {
        self.quantidade
            .decimal_ou_zero()
            .saturating_mul(self.valor.decimal_ou_zero())
    }
}

/// Elemento de uma lista de grupos vinda do front-end. A lista pode conter
/// null, strings ou objetos quebrados no meio dos grupos válidos; esses
/// elementos somam zero em vez de derrubar o cálculo inteiro.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementoGrupo {
    Grupo(GrupoParcelas),
    Invalido(Value),
}

impl ElementoGrupo {
    pub fn subtotal(&self) -> Decimal {
        match self {
            ElementoGrupo::Grupo(g) => g.subtotal(),
            ElementoGrupo::Invalido(_) => Decimal::ZERO,
        }
    }
}

impl From<GrupoParcelas> for ElementoGrupo {
    fn from(g: GrupoParcelas) -> Self {
        ElementoGrupo::Grupo(g)
    }
}
