// src/common/num.rs

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Valor "flexível" vindo do formulário, da importação ou do ERP.
///
/// O front-end manda número, string numérica, null ou qualquer outra coisa;
/// este tipo aceita tudo na desserialização e concentra a coerção numérica em
/// um único ponto (`decimal_ou_zero`), para que o contrato "sempre retorna um
/// número finito" seja garantido aqui e não re-derivado em cada cálculo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValorFlex {
    /// Um número JSON de verdade.
    Numero(Decimal),
    /// String digitada pelo usuário ("1234.56", "12.5abc", "R$ 100"...).
    Texto(String),
    /// Campo ausente ou null.
    #[default]
    Nulo,
    /// Qualquer outro JSON (bool, objeto, array, número fora da faixa).
    Outro(Value),
}

impl ValorFlex {
    /// Coerção estrita: `None` quando o valor não carrega número nenhum.
    pub fn como_decimal(&self) -> Option<Decimal> {
        match self {
            ValorFlex::Numero(d) => Some(*d),
            ValorFlex::Texto(s) => parse_prefixo_numerico(s),
            ValorFlex::Nulo | ValorFlex::Outro(_) => None,
        }
    }

    /// Coerção permissiva usada por todos os cálculos: inválido vira zero.
    pub fn decimal_ou_zero(&self) -> Decimal {
        self.como_decimal().unwrap_or(Decimal::ZERO)
    }
}

impl From<Decimal> for ValorFlex {
    fn from(v: Decimal) -> Self {
        ValorFlex::Numero(v)
    }
}

impl From<i64> for ValorFlex {
    fn from(v: i64) -> Self {
        ValorFlex::Numero(Decimal::from(v))
    }
}

impl From<i32> for ValorFlex {
    fn from(v: i32) -> Self {
        ValorFlex::Numero(Decimal::from(v))
    }
}

impl From<f64> for ValorFlex {
    fn from(v: f64) -> Self {
        // NaN/infinito não têm representação decimal; viram Nulo (= zero).
        Decimal::from_f64(v).map_or(ValorFlex::Nulo, ValorFlex::Numero)
    }
}

impl From<&str> for ValorFlex {
    fn from(v: &str) -> Self {
        ValorFlex::Texto(v.to_owned())
    }
}

impl From<String> for ValorFlex {
    fn from(v: String) -> Self {
        ValorFlex::Texto(v)
    }
}

impl<T: Into<ValorFlex>> From<Option<T>> for ValorFlex {
    fn from(v: Option<T>) -> Self {
        v.map_or(ValorFlex::Nulo, Into::into)
    }
}

/// Lê o maior prefixo numérico da string, como o parser permissivo do
/// front-end que gravou as linhas antigas: espaços iniciais ignorados, sinal,
/// ponto decimal e expoente opcionais, e o resto da string descartado
/// ("12.5abc" → 12.5). Sem dígito nenhum no prefixo → `None`.
fn parse_prefixo_numerico(texto: &str) -> Option<Decimal> {
    let s = texto.trim_start();
    let bytes = s.as_bytes();

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let mut viu_digito = false;
    let mut viu_ponto = false;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'0'..=b'9' => {
                viu_digito = true;
                i += 1;
            }
            b'.' if !viu_ponto => {
                viu_ponto = true;
                i += 1;
            }
            _ => break,
        }
    }
    if !viu_digito {
        return None;
    }

    // Expoente só conta se tiver ao menos um dígito depois do 'e'.
    let mantissa_fim = i;
    let mut expoente: Option<&str> = None;
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let inicio_digitos = j;
        while matches!(bytes.get(j), Some(b'0'..=b'9')) {
            j += 1;
        }
        if j > inicio_digitos {
            expoente = Some(&s[i + 1..j]);
        }
    }

    // Normaliza "+5", "5." e ".5", formas que o parser do Decimal rejeita.
    let mut mantissa = s[..mantissa_fim].to_owned();
    if mantissa.starts_with('+') {
        mantissa.remove(0);
    }
    if mantissa.ends_with('.') {
        mantissa.pop();
    }
    if mantissa.starts_with('.') {
        mantissa.insert(0, '0');
    } else if mantissa.starts_with("-.") {
        mantissa.insert(1, '0');
    }

    match expoente {
        Some(exp) => {
            let exp = exp.strip_prefix('+').unwrap_or(exp);
            Decimal::from_scientific(&format!("{mantissa}e{exp}")).ok()
        }
        None => Decimal::from_str(&mantissa).ok(),
    }
}
