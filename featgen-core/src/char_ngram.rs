//! # Gerador de N-gramas de Caracteres
//!
//! Emite uma feature por substring distinta do token atual cujo comprimento
//! cai no intervalo `[min_length, max_length]`, prefixada com `ng=`.
//!
//! N-gramas de caracteres capturam morfologia sem depender de listas:
//! "jogador", "jogadora" e "jogadores" compartilham "jog", "oga", "gador"...,
//! então o modelo reaproveita o que aprendeu mesmo para flexões nunca vistas
//! no treino.

use crate::generator::FeatureGenerator;
use crate::ngram::NGramSet;
use crate::text::lowercase;

const PREFIX: &str = "ng=";

/// Gerador de features de n-gramas de caracteres do token em foco.
#[derive(Debug, Clone)]
pub struct CharNgramFeatureGenerator {
    min_length: usize,
    max_length: usize,
}

impl CharNgramFeatureGenerator {
    /// Cria o gerador com o intervalo fechado `[min_length, max_length]`.
    ///
    /// Não há restrição de ordem entre os limites: `min_length > max_length`
    /// é aceito na construção e produz zero features por chamada.
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }
}

impl Default for CharNgramFeatureGenerator {
    /// Intervalo padrão: n-gramas de 2 a 5 caracteres.
    fn default() -> Self {
        Self::new(2, 5)
    }
}

impl FeatureGenerator for CharNgramFeatureGenerator {
    fn generate(
        &self,
        features: &mut Vec<String>,
        tokens: &[String],
        index: usize,
        _prior_labels: &[Option<String>],
    ) {
        let mut ngrams = NGramSet::new();
        ngrams.add(&tokens[index], self.min_length, self.max_length);

        for gram in ngrams.iter() {
            // Substring vazia nunca vira feature, mesmo com min_length == 0
            if !gram.is_empty() {
                features.push(format!("{PREFIX}{}", lowercase(gram)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn generate(generator: &CharNgramFeatureGenerator, word: &str) -> Vec<String> {
        let tokens = tokens(&[word]);
        let mut features = Vec::new();
        generator.generate(&mut features, &tokens, 0, &[None]);
        features
    }

    fn as_set(features: &[String]) -> std::collections::HashSet<&str> {
        features.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_substring_unica() {
        let generator = CharNgramFeatureGenerator::new(2, 2);
        assert_eq!(generate(&generator, "aa"), vec!["ng=aa"]);
    }

    #[test]
    fn test_conjunto_completo() {
        let generator = CharNgramFeatureGenerator::new(1, 2);
        let features = generate(&generator, "abc");
        assert_eq!(
            as_set(&features),
            ["ng=a", "ng=b", "ng=c", "ng=ab", "ng=bc"].into_iter().collect()
        );
        assert_eq!(features.len(), 5);
    }

    #[test]
    fn test_caixa_baixa_ordinal() {
        let generator = CharNgramFeatureGenerator::new(2, 3);
        let features = generate(&generator, "SÃO");
        assert_eq!(as_set(&features), ["ng=sã", "ng=ão", "ng=são"].into_iter().collect());
    }

    #[test]
    fn test_token_mais_curto_que_min() {
        let generator = CharNgramFeatureGenerator::new(4, 6);
        assert!(generate(&generator, "abc").is_empty());
    }

    #[test]
    fn test_min_maior_que_max_emite_zero() {
        let generator = CharNgramFeatureGenerator::new(5, 2);
        assert!(generate(&generator, "abcdef").is_empty());
    }

    #[test]
    fn test_min_zero_nao_emite_vazia() {
        let generator = CharNgramFeatureGenerator::new(0, 1);
        let features = generate(&generator, "ab");
        assert_eq!(as_set(&features), ["ng=a", "ng=b"].into_iter().collect());
    }

    #[test]
    fn test_token_vazio() {
        let generator = CharNgramFeatureGenerator::default();
        assert!(generate(&generator, "").is_empty());
    }

    #[test]
    fn test_nao_alfabeticos_tratados_como_caracteres() {
        let generator = CharNgramFeatureGenerator::new(2, 2);
        let features = generate(&generator, "1-a");
        assert_eq!(as_set(&features), ["ng=1-", "ng=-a"].into_iter().collect());
    }

    #[test]
    fn test_padrao_2_a_5() {
        let generator = CharNgramFeatureGenerator::default();
        let features = generate(&generator, "abcdef");
        // comprimentos 2..=5 de "abcdef": 5 + 4 + 3 + 2 = 14 substrings distintas
        assert_eq!(features.len(), 14);
        assert!(features.contains(&"ng=ab".to_string()));
        assert!(features.contains(&"ng=abcde".to_string()));
        assert!(!features.contains(&"ng=abcdef".to_string()));
        assert!(!features.contains(&"ng=a".to_string()));
    }

    #[test]
    fn test_acumulador_preservado() {
        let generator = CharNgramFeatureGenerator::new(2, 2);
        let tokens = tokens(&["ab"]);
        let mut features = vec!["wc=lc".to_string()];
        generator.generate(&mut features, &tokens, 0, &[None]);
        assert_eq!(features, vec!["wc=lc", "ng=ab"]);
    }
}
