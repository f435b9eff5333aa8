//! # Contrato dos Geradores de Features
//!
//! Todo gerador implementa uma única operação: receber a sentença
//! tokenizada, o índice do token em foco e o histórico de rótulos já
//! atribuídos, e **apenas acrescentar** strings de feature ao acumulador
//! compartilhado.
//!
//! ## Regras do contrato
//!
//! - O acumulador é append-only: nenhum gerador remove ou reordena entradas
//!   existentes, então geradores distintos podem ser invocados em sequência
//!   sobre o mesmo `Vec`.
//! - `tokens` e `prior_labels` são somente leitura.
//! - A geração é total: qualquer conteúdo de token (inclusive a string
//!   vazia) produz zero ou mais features, nunca um erro. Índice fora de
//!   `[0, tokens.len())` é violação de contrato do chamador e causa panic.
//! - Instâncias carregam apenas configuração imutável, logo são
//!   `Send + Sync` e podem ser invocadas de várias threads, desde que cada
//!   chamada receba seu próprio acumulador.

/// Contrato polimórfico de geração de features por token.
///
/// O rotulador invoca cada gerador configurado uma vez por token; a lista
/// de geradores é montada pela camada de fábricas ([`crate::factory`]) a
/// partir da configuração declarativa.
pub trait FeatureGenerator: Send + Sync {
    /// Acrescenta ao acumulador as features do token `tokens[index]`.
    ///
    /// `prior_labels` é paralelo a `tokens`; posições ainda não decididas
    /// pelo decodificador vêm como `None` e todo gerador que consulte o
    /// histórico precisa tolerá-las.
    fn generate(
        &self,
        features: &mut Vec<String>,
        tokens: &[String],
        index: usize,
        prior_labels: &[Option<String>],
    );
}

/// Gerador composto: invoca uma lista ordenada de geradores filhos sobre o
/// mesmo acumulador.
///
/// É a materialização do "pipeline de geradores": a ordem dos filhos define
/// a ordem dos blocos de features, e cada filho enxerga (sem alterar) o que
/// os anteriores acrescentaram.
pub struct AggregatedFeatureGenerator {
    generators: Vec<Box<dyn FeatureGenerator>>,
}

impl AggregatedFeatureGenerator {
    pub fn new(generators: Vec<Box<dyn FeatureGenerator>>) -> Self {
        Self { generators }
    }

    /// Quantidade de geradores filhos
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl FeatureGenerator for AggregatedFeatureGenerator {
    fn generate(
        &self,
        features: &mut Vec<String>,
        tokens: &[String],
        index: usize,
        prior_labels: &[Option<String>],
    ) {
        for generator in &self.generators {
            generator.generate(features, tokens, index, prior_labels);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Gerador de teste que emite uma única feature fixa
    struct FixedFeature(&'static str);

    impl FeatureGenerator for FixedFeature {
        fn generate(
            &self,
            features: &mut Vec<String>,
            _tokens: &[String],
            _index: usize,
            _prior_labels: &[Option<String>],
        ) {
            features.push(self.0.to_string());
        }
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_agregado_preserva_ordem_dos_filhos() {
        let aggregated = AggregatedFeatureGenerator::new(vec![
            Box::new(FixedFeature("primeiro")),
            Box::new(FixedFeature("segundo")),
            Box::new(FixedFeature("terceiro")),
        ]);

        let tokens = tokens(&["palavra"]);
        let mut features = Vec::new();
        aggregated.generate(&mut features, &tokens, 0, &[None]);
        assert_eq!(features, vec!["primeiro", "segundo", "terceiro"]);
    }

    #[test]
    fn test_acumulador_append_only() {
        let aggregated =
            AggregatedFeatureGenerator::new(vec![Box::new(FixedFeature("nova"))]);

        let tokens = tokens(&["palavra"]);
        let mut features = vec!["preexistente".to_string()];
        aggregated.generate(&mut features, &tokens, 0, &[None]);

        // Entradas anteriores permanecem intactas e na mesma posição
        assert_eq!(features, vec!["preexistente", "nova"]);
    }

    #[test]
    fn test_agregado_vazio_nao_emite_nada() {
        let aggregated = AggregatedFeatureGenerator::new(vec![]);
        assert!(aggregated.is_empty());

        let tokens = tokens(&["palavra"]);
        let mut features = Vec::new();
        aggregated.generate(&mut features, &tokens, 0, &[None]);
        assert!(features.is_empty());
    }
}
