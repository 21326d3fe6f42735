// src/services/comissoes.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::common::num::ValorFlex;
use crate::models::comissao::{ComissaoCalculada, Empreendimento, ResumoComissoes, TipoCorretor};

/// Quebra de comissões de uma venda, cargo a cargo.
///
/// Busca o empreendimento por id e percorre sua tabela de comissões filtrando
/// pelo tipo de corretor, na ordem em que os cargos foram configurados.
/// Empreendimento ainda não carregado (ou inexistente) produz o resumo vazio;
/// isso acontece o tempo todo enquanto a tela carrega e não é erro.
pub fn calcular_comissoes_dinamicas(
    valor_venda: impl Into<ValorFlex>,
    empreendimento_id: Uuid,
    tipo_corretor: TipoCorretor,
    empreendimentos: &[Empreendimento],
) -> ResumoComissoes {
    let valor_venda = valor_venda.into().decimal_ou_zero();

    let Some(empreendimento) = empreendimentos.iter().find(|e| e.id == empreendimento_id)
    else {
        tracing::debug!(%empreendimento_id, "empreendimento não encontrado; resumo vazio");
        return ResumoComissoes::default();
    };

    let mut por_cargo = Vec::new();
    let mut percentual_total = Decimal::ZERO;
    let mut valor_total = Decimal::ZERO;

    for cargo in empreendimento
        .comissoes
        .iter()
        .filter(|c| c.tipo_corretor == tipo_corretor)
    {
        let percentual = cargo.percentual.decimal_ou_zero();
        let valor = valor_venda
            .checked_mul(percentual)
            .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ZERO);

        percentual_total = percentual_total.saturating_add(percentual);
        // Total somado dos valores já calculados, não re-derivado do
        // percentual total: evita acumular diferença de arredondamento com
        // vários cargos de percentual fracionário.
        valor_total = valor_total.saturating_add(valor);

        por_cargo.push(ComissaoCalculada {
            cargo_id: cargo.cargo_id,
            nome_cargo: cargo.nome_cargo.clone(),
            percentual,
            valor,
        });
    }

    ResumoComissoes {
        por_cargo,
        valor_total,
        percentual_total,
    }
}

/// Fator de comissão aplicado: comissão nominal normalizada pelo pró-soluto.
///
/// As parcelas de comissão são pagas contra o valor de pró-soluto, não contra
/// o valor cheio da venda, então o percentual nominal precisa ser reescalado:
/// `(valor_venda × percentual/100) / pro_soluto`. Pró-soluto zero ou negativo
/// não tem base de pagamento e devolve zero. Fórmula deliberadamente distinta
/// de `pro_soluto::calcular_fator_comissao` (percentual chapado).
pub fn calcular_fator_comissao_aplicado(
    valor_venda: impl Into<ValorFlex>,
    valor_pro_soluto: impl Into<ValorFlex>,
    percentual_total: impl Into<ValorFlex>,
) -> Decimal {
    let pro_soluto = valor_pro_soluto.into().decimal_ou_zero();
    if pro_soluto <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    valor_venda
        .into()
        .decimal_ou_zero()
        .checked_mul(percentual_total.into().decimal_ou_zero())
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        .and_then(|v| v.checked_div(pro_soluto))
        .unwrap_or(Decimal::ZERO)
}

/// Comissão de uma parcela: valor da parcela × fator aplicado.
pub fn calcular_comissao_pagamento(
    valor_parcela: impl Into<ValorFlex>,
    fator: impl Into<ValorFlex>,
) -> Decimal {
    valor_parcela
        .into()
        .decimal_ou_zero()
        .saturating_mul(fator.into().decimal_ou_zero())
}
