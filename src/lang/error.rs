use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: "",
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn detail(&self) -> &'static str {
        self.message
    }

    /// Tags the error with the line it happened on.
    /// An error already tagged by a deeper statement keeps its line.
    pub fn in_line_number(&self, line: LineNumber) -> Error {
        Error {
            code: self.code,
            line_number: self.line_number.or(line),
            message: self.message,
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            line_number: self.line_number,
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NextWithoutFor = 1,
    SyntaxError = 2,
    ReturnWithoutGosub = 3,
    OutOfData = 4,
    OutOfMemory = 7,
    UndefinedLine = 8,
    DivisionByZero = 11,
    TypeMismatch = 13,
    FormulaTooComplex = 16,
    InternalError = 51,
    InputPastEnd = 62,
    EndOfProgram = 70,
    UnclosedBracket = 71,
    ExpectedIdentifier = 72,
    StringOperator = 73,
    NumericOperator = 74,
    UndefinedVariable = 75,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        use ErrorCode::*;
        match self {
            NextWithoutFor => "NEXT WITHOUT FOR",
            SyntaxError => "SYNTAX ERROR",
            ReturnWithoutGosub => "RETURN WITHOUT GOSUB",
            OutOfData => "READ PAST END OF DATA",
            OutOfMemory => "OUT OF MEMORY",
            UndefinedLine => "UNDEFINED LINE",
            DivisionByZero => "DIVISION BY ZERO",
            TypeMismatch => "TYPE MISMATCH",
            FormulaTooComplex => "FORMULA TOO COMPLEX",
            InternalError => "INTERNAL ERROR",
            InputPastEnd => "INPUT PAST END",
            EndOfProgram => "UNEXPECTED END OF PROGRAM",
            UnclosedBracket => "UNCLOSED BRACKET",
            ExpectedIdentifier => "EXPECTED IDENTIFIER",
            StringOperator => "OPERATOR NOT SUPPORTED FOR STRINGS",
            NumericOperator => "OPERATOR ONLY HANDLES NUMBERS",
            UndefinedVariable => "UNDEFINED VARIABLE",
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if suffix.is_empty() {
            write!(f, "{}", self.code.as_str())
        } else if self.line_number.is_some() {
            write!(f, "{} IN{}", self.code.as_str(), suffix)
        } else {
            write!(f, "{}{}", self.code.as_str(), suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(error!(TypeMismatch).to_string(), "TYPE MISMATCH");
        assert_eq!(
            error!(UndefinedLine, Some(30); "500").to_string(),
            "UNDEFINED LINE IN 30; 500"
        );
        assert_eq!(
            error!(SyntaxError; "EXPECTED LITERAL").to_string(),
            "SYNTAX ERROR; EXPECTED LITERAL"
        );
    }

    #[test]
    fn test_first_line_number_sticks() {
        let e = error!(OutOfData, Some(20)).in_line_number(Some(10));
        assert_eq!(e.line_number(), Some(20));
    }
}
