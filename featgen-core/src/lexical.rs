//! # Geradores Lexicais de Superfície
//!
//! Dois geradores pequenos que completam o conjunto básico de qualquer
//! pipeline: a palavra em si (`w=`) e a posição na sentença (`S=begin`,
//! `S=end`). Cada sinal é um gerador independente para que a configuração
//! declarativa possa ligar e desligar cada um separadamente.

use crate::generator::FeatureGenerator;
use crate::text::lowercase;

const WORD_PREFIX: &str = "w=";
const SENTENCE_BEGIN: &str = "S=begin";
const SENTENCE_END: &str = "S=end";

/// Emite a superfície do token atual como feature `w=`.
#[derive(Debug, Clone)]
pub struct TokenFeatureGenerator {
    lowercase: bool,
}

impl TokenFeatureGenerator {
    /// `lowercase` controla se a superfície passa pelo fold de caixa.
    pub fn new(lowercase: bool) -> Self {
        Self { lowercase }
    }
}

impl Default for TokenFeatureGenerator {
    /// Com fold de caixa: "Brasil" e "brasil" produzem a mesma feature.
    fn default() -> Self {
        Self::new(true)
    }
}

impl FeatureGenerator for TokenFeatureGenerator {
    fn generate(
        &self,
        features: &mut Vec<String>,
        tokens: &[String],
        index: usize,
        _prior_labels: &[Option<String>],
    ) {
        let token = &tokens[index];
        if self.lowercase {
            features.push(format!("{WORD_PREFIX}{}", lowercase(token)));
        } else {
            features.push(format!("{WORD_PREFIX}{token}"));
        }
    }
}

/// Marca o primeiro e/ou o último token da sentença.
///
/// Início e fim de sentença carregam sinal forte para rotulagem: a primeira
/// palavra é maiúscula por convenção (não por ser entidade), e a última é
/// quase sempre pontuação.
#[derive(Debug, Clone)]
pub struct SentenceFeatureGenerator {
    begin: bool,
    end: bool,
}

impl SentenceFeatureGenerator {
    pub fn new(begin: bool, end: bool) -> Self {
        Self { begin, end }
    }
}

impl Default for SentenceFeatureGenerator {
    /// Apenas a marca de início, o sinal mais informativo dos dois.
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl FeatureGenerator for SentenceFeatureGenerator {
    fn generate(
        &self,
        features: &mut Vec<String>,
        tokens: &[String],
        index: usize,
        _prior_labels: &[Option<String>],
    ) {
        if self.begin && index == 0 {
            features.push(SENTENCE_BEGIN.to_string());
        }
        if self.end && index + 1 == tokens.len() {
            features.push(SENTENCE_END.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn generate_at(
        generator: &dyn FeatureGenerator,
        tokens: &[String],
        index: usize,
    ) -> Vec<String> {
        let prior_labels = vec![None; tokens.len()];
        let mut features = Vec::new();
        generator.generate(&mut features, tokens, index, &prior_labels);
        features
    }

    #[test]
    fn test_superficie_com_fold() {
        let generator = TokenFeatureGenerator::default();
        let tokens = tokens(&["Brasil"]);
        assert_eq!(generate_at(&generator, &tokens, 0), vec!["w=brasil"]);
    }

    #[test]
    fn test_superficie_sem_fold() {
        let generator = TokenFeatureGenerator::new(false);
        let tokens = tokens(&["Brasil"]);
        assert_eq!(generate_at(&generator, &tokens, 0), vec!["w=Brasil"]);
    }

    #[test]
    fn test_superficie_sempre_uma_feature() {
        let generator = TokenFeatureGenerator::default();
        let tokens = tokens(&["", "1987", "..."]);
        for index in 0..tokens.len() {
            assert_eq!(generate_at(&generator, &tokens, index).len(), 1);
        }
    }

    #[test]
    fn test_inicio_de_sentenca() {
        let generator = SentenceFeatureGenerator::default();
        let tokens = tokens(&["O", "rato", "roeu"]);
        assert_eq!(generate_at(&generator, &tokens, 0), vec!["S=begin"]);
        assert!(generate_at(&generator, &tokens, 1).is_empty());
        assert!(generate_at(&generator, &tokens, 2).is_empty());
    }

    #[test]
    fn test_fim_de_sentenca() {
        let generator = SentenceFeatureGenerator::new(false, true);
        let tokens = tokens(&["O", "rato", "roeu"]);
        assert!(generate_at(&generator, &tokens, 0).is_empty());
        assert_eq!(generate_at(&generator, &tokens, 2), vec!["S=end"]);
    }

    #[test]
    fn test_sentenca_de_um_token_emite_ambas() {
        let generator = SentenceFeatureGenerator::new(true, true);
        let tokens = tokens(&["Oi"]);
        assert_eq!(generate_at(&generator, &tokens, 0), vec!["S=begin", "S=end"]);
    }
}
