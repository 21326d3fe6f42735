//! motor-comissoes — núcleo de cálculo do back-office de corretagem.
//!
//! Calcula o valor de pró-soluto (sinal + entrada + balões) de uma venda e a
//! quebra de comissões por cargo de um empreendimento. Todas as operações são
//! funções puras e síncronas: entrada inválida vira zero, nunca erro.

pub mod common;
pub mod models;
pub mod services;

pub use common::error::EngineError;
pub use common::num::ValorFlex;
pub use models::comissao::{
    ComissaoCalculada, ComissaoCargo, Empreendimento, ResumoComissoes, TipoCorretor,
};
pub use models::venda::{ElementoGrupo, GrupoParcelas, StatusBalao, Venda};
pub use services::comissoes::{
    calcular_comissao_pagamento, calcular_comissoes_dinamicas, calcular_fator_comissao_aplicado,
};
pub use services::pro_soluto::{
    calcular_fator_comissao, calcular_valor_pro_soluto, calcular_valor_pro_soluto_json,
};
