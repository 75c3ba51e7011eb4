#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    LineNumber(u16),
    Newline,
    Literal(Literal),
    Word(Word),
    Operator(Operator),
    Ident(String),
    LParen,
    RParen,
    Comma,
    Semicolon,
}

impl Token {
    /// Keywords and operator words are matched without regard to case.
    pub fn from_string(s: &str) -> Option<Token> {
        if let Some(word) = Word::from_string(s) {
            return Some(Token::Word(word));
        }
        if let Some(op) = Operator::from_string(s) {
            return Some(Token::Operator(op));
        }
        match s {
            "(" => Some(Token::LParen),
            ")" => Some(Token::RParen),
            "," => Some(Token::Comma),
            ";" => Some(Token::Semicolon),
            _ => None,
        }
    }

    pub fn is_word(&self, word: Word) -> bool {
        matches!(self, Token::Word(w) if *w == word)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            LineNumber(n) => write!(f, "{}", n),
            Newline => writeln!(f),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
            Semicolon => write!(f, ";"),
        }
    }
}

/// Literals keep their lexeme; numbers are converted when evaluated.
#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(String),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Number(s) => write!(f, "{}", s),
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// Keywords. `?` and `'` are accepted as `PRINT` and `REM`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Data,
    Else,
    End,
    For,
    Gosub,
    Goto,
    If,
    Input,
    Let,
    Next,
    Print,
    Read,
    Rem,
    Return,
    Step,
    Then,
    To,
}

const WORDS: [(Word, &str); 17] = [
    (Word::Data, "DATA"),
    (Word::Else, "ELSE"),
    (Word::End, "END"),
    (Word::For, "FOR"),
    (Word::Gosub, "GOSUB"),
    (Word::Goto, "GOTO"),
    (Word::If, "IF"),
    (Word::Input, "INPUT"),
    (Word::Let, "LET"),
    (Word::Next, "NEXT"),
    (Word::Print, "PRINT"),
    (Word::Read, "READ"),
    (Word::Rem, "REM"),
    (Word::Return, "RETURN"),
    (Word::Step, "STEP"),
    (Word::Then, "THEN"),
    (Word::To, "TO"),
];

impl Word {
    fn from_string(s: &str) -> Option<Word> {
        match s {
            "?" => return Some(Word::Print),
            "'" => return Some(Word::Rem),
            _ => {}
        }
        WORDS
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s))
            .map(|(word, _)| *word)
    }

    pub fn as_str(self) -> &'static str {
        WORDS
            .iter()
            .find(|(word, _)| *word == self)
            .map_or("", |(_, name)| *name)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbolic and word operators. `MOD` is accepted for `%`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Caret,
    Multiply,
    Divide,
    Modulus,
    Plus,
    Minus,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    And,
    Or,
}

const OPERATORS: [(Operator, &str); 14] = [
    (Operator::Caret, "^"),
    (Operator::Multiply, "*"),
    (Operator::Divide, "/"),
    (Operator::Modulus, "%"),
    (Operator::Plus, "+"),
    (Operator::Minus, "-"),
    (Operator::Equal, "="),
    (Operator::NotEqual, "<>"),
    (Operator::Less, "<"),
    (Operator::LessEqual, "<="),
    (Operator::Greater, ">"),
    (Operator::GreaterEqual, ">="),
    (Operator::And, "AND"),
    (Operator::Or, "OR"),
];

impl Operator {
    fn from_string(s: &str) -> Option<Operator> {
        if s.eq_ignore_ascii_case("MOD") {
            return Some(Operator::Modulus);
        }
        OPERATORS
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s))
            .map(|(op, _)| *op)
    }

    pub fn as_str(self) -> &'static str {
        OPERATORS
            .iter()
            .find(|(op, _)| *op == self)
            .map_or("", |(_, name)| *name)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
