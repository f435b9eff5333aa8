//! # Classificador de Forma Lexical (Word Shape)
//!
//! Reduz um token a um rótulo categórico curto que resume sua composição:
//! caixa, dígitos e pontuação. Palavras nunca vistas no treino ainda caem
//! em uma classe conhecida ("Fulano" → `ic`, "1987" → `4d`), e é isso que
//! dá ao modelo capacidade de generalizar para vocabulário novo.
//!
//! ## Tabela de Classes
//!
//! | Rótulo  | Significado                     | Exemplos        |
//! |---------|---------------------------------|-----------------|
//! | `lc`    | todas minúsculas                | casa, de        |
//! | `2d`    | exatamente dois dígitos         | 22, 07          |
//! | `4d`    | exatamente quatro dígitos       | 1987, 2026      |
//! | `num`   | só dígitos, outra contagem      | 7, 123456       |
//! | `an`    | dígitos e letras                | G8, covid19     |
//! | `dd`    | dígitos com hífen               | 21-3, 1-0       |
//! | `ds`    | dígitos com barra               | 01/02           |
//! | `dc`    | dígitos com vírgula             | 1,5             |
//! | `dp`    | dígitos com ponto               | 1.5, 10.2.3     |
//! | `sc`    | uma única letra maiúscula       | A               |
//! | `ac`    | todas maiúsculas                | FIFA, STF       |
//! | `ic`    | inicial maiúscula               | Brasil, R$      |
//! | `other` | qualquer outra coisa            | ..., iPhone     |
//!
//! A tabela é contrato **deste módulo**. Os geradores dependem apenas da
//! assinatura de [`shape_of`], então as regras podem evoluir (ou ser
//! substituídas por outro esquema de classes) sem tocar em nenhum gerador.

/// Padrão de composição de um token, reconhecido em uma única passada.
#[derive(Debug, Clone, Copy, Default)]
struct TokenPattern {
    chars: usize,
    letters: usize,
    digits: usize,
    uppercase: usize,
    lowercase: usize,
    initial_uppercase: bool,
    has_hyphen: bool,
    has_slash: bool,
    has_comma: bool,
    has_period: bool,
}

impl TokenPattern {
    fn recognize(token: &str) -> Self {
        let mut pattern = TokenPattern::default();

        for (i, ch) in token.chars().enumerate() {
            pattern.chars += 1;
            if ch.is_alphabetic() {
                pattern.letters += 1;
            }
            if ch.is_numeric() {
                pattern.digits += 1;
            }
            if ch.is_uppercase() {
                pattern.uppercase += 1;
                if i == 0 {
                    pattern.initial_uppercase = true;
                }
            }
            if ch.is_lowercase() {
                pattern.lowercase += 1;
            }
            match ch {
                '-' => pattern.has_hyphen = true,
                '/' => pattern.has_slash = true,
                ',' => pattern.has_comma = true,
                '.' => pattern.has_period = true,
                _ => {}
            }
        }

        pattern
    }

    fn all_lowercase_letters(&self) -> bool {
        self.chars > 0 && self.lowercase == self.chars
    }

    fn all_uppercase_letters(&self) -> bool {
        self.chars > 0 && self.uppercase == self.chars
    }

    fn all_digits(&self) -> bool {
        self.chars > 0 && self.digits == self.chars
    }
}

/// Classifica a forma lexical do token.
///
/// Função total e determinística: qualquer string (inclusive a vazia, que
/// cai em `other`) recebe exatamente um rótulo da tabela do módulo.
pub fn shape_of(token: &str) -> &'static str {
    let pattern = TokenPattern::recognize(token);

    if pattern.all_lowercase_letters() {
        "lc"
    } else if pattern.all_digits() {
        match pattern.chars {
            2 => "2d",
            4 => "4d",
            _ => "num",
        }
    } else if pattern.digits > 0 {
        if pattern.letters > 0 {
            "an"
        } else if pattern.has_hyphen {
            "dd"
        } else if pattern.has_slash {
            "ds"
        } else if pattern.has_comma {
            "dc"
        } else if pattern.has_period {
            "dp"
        } else {
            "num"
        }
    } else if pattern.all_uppercase_letters() && pattern.chars == 1 {
        "sc"
    } else if pattern.all_uppercase_letters() {
        "ac"
    } else if pattern.initial_uppercase {
        "ic"
    } else {
        "other"
    }
}
