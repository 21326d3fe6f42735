// src/services/pro_soluto.rs

use rust_decimal::Decimal;
use serde_json::Value;

use crate::common::num::ValorFlex;
use crate::models::venda::{ElementoGrupo, StatusBalao, Venda};

/// Valor de pró-soluto de uma venda: sinal + entrada + balões.
///
/// A entrada e os balões têm duas fontes, em ordem de prioridade: a lista de
/// grupos escalonados, quando não vazia, e senão os campos achatados
/// quantidade × valor gravados pelo armazenamento antigo. Nunca falha e nunca
/// devolve algo que não seja um decimal finito.
pub fn calcular_valor_pro_soluto(
    venda: &Venda,
    grupos_entrada: &[ElementoGrupo],
    grupos_balao: &[ElementoGrupo],
) -> Decimal {
    let sinal = if venda.teve_sinal {
        venda.valor_sinal.decimal_ou_zero()
    } else {
        Decimal::ZERO
    };

    let entrada = if !venda.teve_entrada {
        Decimal::ZERO
    } else if !venda.entrada_parcelada {
        venda.valor_entrada.decimal_ou_zero()
    } else if !grupos_entrada.is_empty() {
        somar_grupos(grupos_entrada)
    } else {
        venda
            .qtd_parcelas_entrada
            .decimal_ou_zero()
            .saturating_mul(venda.valor_parcela_entrada.decimal_ou_zero())
    };

    let balao = if venda.status_balao != StatusBalao::Sim {
        Decimal::ZERO
    } else if !grupos_balao.is_empty() {
        somar_grupos(grupos_balao)
    } else {
        venda
            .qtd_baloes
            .decimal_ou_zero()
            .saturating_mul(venda.valor_balao.decimal_ou_zero())
    };

    sinal.saturating_add(entrada).saturating_add(balao)
}

/// Fronteira JSON tolerante, usada pela tela para exibição ao vivo.
///
/// Venda que não é objeto → warning e zero. Listas de grupos que não são
/// arrays → tratadas como vazias (cai no fallback achatado).
pub fn calcular_valor_pro_soluto_json(
    venda: &Value,
    grupos_entrada: &Value,
    grupos_balao: &Value,
) -> Decimal {
    if !venda.is_object() {
        tracing::warn!("venda malformada no cálculo de pró-soluto; retornando zero");
        return Decimal::ZERO;
    }
    // Todo campo de Venda é tolerante, então um objeto sempre desserializa.
    let venda: Venda = serde_json::from_value(venda.clone()).unwrap_or_default();

    calcular_valor_pro_soluto(
        &venda,
        &grupos_de_json(grupos_entrada),
        &grupos_de_json(grupos_balao),
    )
}

/// Fator de comissão "chapado": percentual / 100.
///
/// Sem clamp de faixa: percentual negativo ou acima de 100 passa direto; só
/// entrada não-numérica vira zero. Usado pelas telas que tratam a comissão
/// como fração do valor da venda; para o fator pago contra o pró-soluto, ver
/// `comissoes::calcular_fator_comissao_aplicado`.
pub fn calcular_fator_comissao(percentual: impl Into<ValorFlex>) -> Decimal {
    percentual
        .into()
        .decimal_ou_zero()
        .checked_div(Decimal::ONE_HUNDRED)
        .unwrap_or(Decimal::ZERO)
}

fn somar_grupos(grupos: &[ElementoGrupo]) -> Decimal {
    grupos
        .iter()
        .map(ElementoGrupo::subtotal)
        .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v))
}

fn grupos_de_json(bruto: &Value) -> Vec<ElementoGrupo> {
    match bruto.as_array() {
        Some(itens) => itens
            .iter()
            .map(|item| {
                serde_json::from_value(item.clone())
                    .unwrap_or_else(|_| ElementoGrupo::Invalido(Value::Null))
            })
            .collect(),
        None => Vec::new(),
    }
}
