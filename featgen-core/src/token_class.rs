//! # Gerador de Classe do Token
//!
//! Emite a feature `wc=<classe>` com a forma lexical do token atual (ver
//! [`crate::shape`]) e, opcionalmente, a feature conjunta
//! `w&c=<palavra>,<classe>`.
//!
//! A classe sozinha generaliza ("1987" e "2002" viram ambas `4d`); a
//! conjunta amarra palavra e forma para os casos em que a palavra
//! específica carrega sinal próprio.

use crate::generator::FeatureGenerator;
use crate::shape::shape_of;
use crate::text::lowercase;

const TOKEN_CLASS_PREFIX: &str = "wc=";
const TOKEN_AND_CLASS_PREFIX: &str = "w&c=";

/// Gerador da classe lexical do token em foco.
#[derive(Debug, Clone)]
pub struct TokenClassFeatureGenerator {
    word_and_class: bool,
}

impl TokenClassFeatureGenerator {
    /// `word_and_class` liga a emissão adicional da feature conjunta `w&c=`.
    pub fn new(word_and_class: bool) -> Self {
        Self { word_and_class }
    }
}

impl Default for TokenClassFeatureGenerator {
    /// Sem a feature conjunta: apenas `wc=` é emitida.
    fn default() -> Self {
        Self::new(false)
    }
}

impl FeatureGenerator for TokenClassFeatureGenerator {
    fn generate(
        &self,
        features: &mut Vec<String>,
        tokens: &[String],
        index: usize,
        _prior_labels: &[Option<String>],
    ) {
        let token = &tokens[index];
        let word_class = shape_of(token);
        features.push(format!("{TOKEN_CLASS_PREFIX}{word_class}"));

        if self.word_and_class {
            features.push(format!(
                "{TOKEN_AND_CLASS_PREFIX}{},{word_class}",
                lowercase(token)
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(generator: &TokenClassFeatureGenerator, word: &str) -> Vec<String> {
        let tokens = vec![word.to_string()];
        let mut features = Vec::new();
        generator.generate(&mut features, &tokens, 0, &[None]);
        features
    }

    #[test]
    fn test_emite_exatamente_uma_feature_sem_flag() {
        let generator = TokenClassFeatureGenerator::default();
        assert_eq!(generate(&generator, "Brasil"), vec!["wc=ic"]);
        assert_eq!(generate(&generator, "1987"), vec!["wc=4d"]);
        assert_eq!(generate(&generator, ""), vec!["wc=other"]);
    }

    #[test]
    fn test_feature_conjunta_com_flag() {
        let generator = TokenClassFeatureGenerator::new(true);
        assert_eq!(
            generate(&generator, "Brasil"),
            vec!["wc=ic", "w&c=brasil,ic"]
        );
    }

    #[test]
    fn test_conjunta_usa_fold_ordinal() {
        let generator = TokenClassFeatureGenerator::new(true);
        assert_eq!(generate(&generator, "SÃO"), vec!["wc=ac", "w&c=são,ac"]);
    }

    #[test]
    fn test_acumulador_preservado() {
        let generator = TokenClassFeatureGenerator::default();
        let tokens = vec!["casa".to_string()];
        let mut features = vec!["ng=ca".to_string()];
        generator.generate(&mut features, &tokens, 0, &[None]);
        assert_eq!(features, vec!["ng=ca", "wc=lc"]);
    }

    #[test]
    fn test_tokens_degenerados_nao_falham() {
        let generator = TokenClassFeatureGenerator::new(true);
        for word in ["", "...", "123", "a1-b/2"] {
            let features = generate(&generator, word);
            assert_eq!(features.len(), 2);
            assert!(features[0].starts_with("wc="));
            assert!(features[1].starts_with("w&c="));
        }
    }
}
