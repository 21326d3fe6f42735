// tests/motor_calculo.rs
//
// Cenários ponta a ponta na fronteira JSON, com os mesmos payloads que a tela
// e a importação mandam.

use motor_comissoes::{
    calcular_comissao_pagamento, calcular_fator_comissao, calcular_fator_comissao_aplicado,
    calcular_valor_pro_soluto_json, Empreendimento, ResumoComissoes, TipoCorretor, Venda,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;
use uuid::Uuid;

#[test]
fn venda_so_com_sinal() {
    let venda = json!({
        "teveSinal": true,
        "valorSinal": 10000,
        "teveEntrada": false,
        "statusBalao": "nao",
    });
    assert_eq!(
        calcular_valor_pro_soluto_json(&venda, &json!([]), &json!([])),
        dec!(10000)
    );
}

#[test]
fn entrada_parcelada_em_grupos() {
    let venda = json!({
        "teveSinal": false,
        "teveEntrada": true,
        "entradaParcelada": true,
    });
    let grupos = json!([
        {"quantidade": 3, "valor": 1000},
        {"quantidade": 2, "valor": 2000},
    ]);
    assert_eq!(
        calcular_valor_pro_soluto_json(&venda, &grupos, &json!([])),
        dec!(7000)
    );
}

#[test]
fn balao_confirmado() {
    let venda = json!({
        "teveSinal": false,
        "teveEntrada": false,
        "statusBalao": "sim",
    });
    let baloes = json!([{"quantidade": 2, "valor": 5000}]);
    assert_eq!(
        calcular_valor_pro_soluto_json(&venda, &json!([]), &baloes),
        dec!(10000)
    );
}

#[test]
fn grupos_mistos_validos_e_invalidos() {
    let venda = json!({
        "teveEntrada": true,
        "entradaParcelada": true,
        "statusBalao": "sim",
    });
    let entrada = json!([
        {"quantidade": 3, "valor": 1000},
        null,
        {"quantidade": "abc", "valor": 2000},
        {"quantidade": 2, "valor": "xyz"},
        {"quantidade": 1, "valor": 500},
    ]);
    let baloes = json!([
        {"quantidade": 2, "valor": 5000},
        null,
        {},
    ]);
    // 3×1000 + 1×500 + 2×5000
    assert_eq!(
        calcular_valor_pro_soluto_json(&venda, &entrada, &baloes),
        dec!(13500)
    );
}

#[test]
fn fatores_de_comissao() {
    assert_eq!(calcular_fator_comissao(7), dec!(0.07));
    assert_eq!(calcular_fator_comissao(None::<i64>), Decimal::ZERO);
    assert_eq!(
        calcular_fator_comissao_aplicado(100_000, 0, 7),
        Decimal::ZERO
    );
}

#[test]
fn chamadas_repetidas_dao_o_mesmo_resultado() {
    let venda = json!({
        "teveSinal": true,
        "valorSinal": "12.5abc",
        "teveEntrada": true,
        "entradaParcelada": true,
        "qtdParcelasEntrada": "4",
        "valorParcelaEntrada": 250,
        "statusBalao": "pendente",
    });
    let primeira = calcular_valor_pro_soluto_json(&venda, &json!([]), &json!([]));
    let segunda = calcular_valor_pro_soluto_json(&venda, &json!([]), &json!([]));
    assert_eq!(primeira, segunda);
    assert_eq!(primeira, dec!(1012.5));
}

#[test]
fn fluxo_completo_da_tela_de_venda() {
    let id = Uuid::new_v4();
    let emp = Empreendimento::de_json(&format!(
        r#"{{
            "id": "{id}",
            "comissoes": [
                {{"cargoId": "{c1}", "nomeCargo": "Corretor", "tipoCorretor": "interno", "percentual": 5}},
                {{"cargoId": "{c2}", "nomeCargo": "Gerente", "tipoCorretor": "interno", "percentual": 2}},
                {{"cargoId": "{c3}", "nomeCargo": "Parceiro", "tipoCorretor": "externo", "percentual": 6}}
            ]
        }}"#,
        c1 = Uuid::new_v4(),
        c2 = Uuid::new_v4(),
        c3 = Uuid::new_v4(),
    ))
    .unwrap();

    let resumo = motor_comissoes::calcular_comissoes_dinamicas(
        100_000,
        id,
        TipoCorretor::Interno,
        std::slice::from_ref(&emp),
    );
    assert_eq!(resumo.percentual_total, dec!(7));
    assert_eq!(resumo.valor_total, dec!(7000));

    // Parcelas pagas contra o pró-soluto de 35000.
    let fator = calcular_fator_comissao_aplicado(100_000, 35_000, resumo.percentual_total);
    assert_eq!(fator, dec!(0.2));
    assert_eq!(calcular_comissao_pagamento(1750, fator), dec!(350));
}

#[test]
fn warning_de_venda_malformada_nao_altera_o_resultado() {
    // O diagnóstico sai pelo subscriber do tracing; instalado ou não, o
    // retorno é o mesmo zero.
    let _ = tracing_subscriber::fmt()
        .with_env_filter("motor_comissoes=warn")
        .try_init();
    assert_eq!(
        calcular_valor_pro_soluto_json(&json!(42), &json!([]), &json!([])),
        Decimal::ZERO
    );
}

#[test]
fn importacao_estrita_rejeita_linha_corrompida() {
    assert!(Venda::de_json("{\"teveSinal\": true}").is_ok());
    assert!(Venda::de_json("truncad").is_err());
    assert!(Empreendimento::de_json("[]").is_err());
}

#[test]
fn resumo_serializa_em_camel_case() {
    let resumo = ResumoComissoes::default();
    let bruto = serde_json::to_value(&resumo).unwrap();
    assert!(bruto.get("porCargo").is_some());
    assert!(bruto.get("valorTotal").is_some());
    assert!(bruto.get("percentualTotal").is_some());
}
