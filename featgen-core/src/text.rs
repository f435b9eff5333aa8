//! # Fold de Caixa
//!
//! Normalização de caixa compartilhada por todos os geradores de features.
//! O fold é feito caractere a caractere (ordinal), nunca sensível a locale:
//! a mesma palavra precisa produzir a mesma feature tanto na máquina que
//! treinou o modelo quanto na que o aplica, independente do idioma do
//! sistema operacional.

/// Converte a string para minúsculas com fold ordinal (caractere a caractere).
///
/// As features geradas no treino precisam casar byte a byte com as geradas
/// na inferência, então nenhuma regra dependente de locale entra aqui.
pub fn lowercase(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_ascii() {
        assert_eq!(lowercase("BraSil"), "brasil");
    }

    #[test]
    fn test_lowercase_acentos() {
        assert_eq!(lowercase("SÃO"), "são");
        assert_eq!(lowercase("AÇÚCAR"), "açúcar");
    }

    #[test]
    fn test_lowercase_vazia_e_nao_letras() {
        assert_eq!(lowercase(""), "");
        assert_eq!(lowercase("12-3/A.b"), "12-3/a.b");
    }
}
