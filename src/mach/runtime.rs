use super::{Console, Evaluator, Line, Program, Stack, Statement, Val, Var};
use crate::error;
use crate::lang::token::{Literal, Operator, Token, Word};
use crate::lang::{lex, Cursor, Error, LineNumber};
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

const PRINT_ZONE: usize = 14;

/// Where a run stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    HaltedOk,
    HaltedError,
}

/// Where to go after a statement.
#[derive(Debug, PartialEq)]
enum Flow {
    Next,
    Jump(usize),
    End,
}

#[derive(Debug, Clone)]
struct Frame {
    var: Rc<str>,
    limit: f64,
    step: f64,
    resume: usize,
}

/// ## Statement executor
///
/// Walks the line table with a program counter. Each line is dispatched
/// on its statement kind and every statement must consume all of its
/// tokens. The first error halts the run and comes back tagged with the
/// line it happened on.

#[derive(Debug)]
pub struct Runtime {
    program: Program,
    vars: Var,
    gosubs: Stack<usize>,
    loops: Stack<Frame>,
    pc: usize,
    state: State,
    trace: bool,
    column: usize,
}

impl std::str::FromStr for Runtime {
    type Err = Error;
    fn from_str(s: &str) -> Result<Runtime> {
        Runtime::new(lex(s))
    }
}

impl Runtime {
    /// Fails only when a `DATA` statement holds something other than literals.
    pub fn new<T: IntoIterator<Item = Token>>(tokens: T) -> Result<Runtime> {
        Ok(Runtime {
            program: Program::load(tokens)?,
            vars: Var::new(),
            gosubs: Stack::new("TOO MANY GOSUBS"),
            loops: Stack::new("TOO MANY FOR LOOPS"),
            pc: 0,
            state: State::Running,
            trace: false,
            column: 0,
        })
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn trace(&self) -> bool {
        self.trace
    }

    pub fn set_trace(&mut self, trace: bool) {
        self.trace = trace;
    }

    pub fn get_variable(&self, name: &str) -> Option<Val> {
        self.vars.fetch(name).cloned()
    }

    pub fn set_variable(&mut self, name: &str, val: Val) -> Result<()> {
        self.vars.store(name, val)
    }

    /// Runs from the first line. Variables survive between runs
    /// so the host can set them up beforehand.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        self.pc = 0;
        self.gosubs.clear();
        self.loops.clear();
        self.program.data_mut().restart();
        self.column = 0;
        self.state = State::Running;
        let tokens = self.program.tokens();
        while let Some(line) = self.program.line(self.pc).cloned() {
            let flow = self
                .step(&tokens, &line, console)
                .map_err(|e| e.in_line_number(line.number()));
            match flow {
                Ok(Flow::Next) => self.pc += 1,
                Ok(Flow::Jump(pc)) => self.pc = pc,
                Ok(Flow::End) => break,
                Err(error) => {
                    self.state = State::HaltedError;
                    return Err(error);
                }
            }
        }
        self.state = State::HaltedOk;
        Ok(())
    }

    fn step(
        &mut self,
        tokens: &[Token],
        line: &Line,
        console: &mut dyn Console,
    ) -> Result<Flow> {
        if self.trace {
            if let Some(number) = line.number() {
                self.write(console, &format!("[{}]", number))?;
            }
        }
        let mut cursor = Cursor::new(&tokens[line.operands()]);
        let statement = match line.statement() {
            Some(statement) => statement,
            None => Statement::classify(&mut cursor)?,
        };
        self.statement(statement, &mut cursor, console)
    }

    fn statement(
        &mut self,
        statement: Statement,
        cursor: &mut Cursor,
        console: &mut dyn Console,
    ) -> Result<Flow> {
        let flow = match statement {
            Statement::Data | Statement::Rem => return Ok(Flow::Next),
            Statement::Empty => Flow::Next,
            Statement::End => Flow::End,
            Statement::For => self.r#for(cursor)?,
            Statement::Gosub => self.gosub(cursor)?,
            Statement::Goto => Flow::Jump(self.target(cursor)?),
            Statement::If => return self.r#if(cursor, console),
            Statement::Input => self.input(cursor, console)?,
            Statement::Let => self.r#let(cursor)?,
            Statement::Next => self.next(cursor)?,
            Statement::Print => self.print(cursor, console)?,
            Statement::Read => self.read(cursor)?,
            Statement::Return => self.r#return()?,
        };
        cursor.expect_end()?;
        Ok(flow)
    }

    fn expression(&self, cursor: &mut Cursor) -> Result<Val> {
        Evaluator::new(&self.vars).expression(cursor)
    }

    fn number(&self, cursor: &mut Cursor) -> Result<f64> {
        f64::try_from(self.expression(cursor)?)
    }

    fn write(&mut self, console: &mut dyn Console, s: &str) -> Result<()> {
        match s.rfind('\n') {
            Some(pos) => self.column = s[pos + 1..].chars().count(),
            None => self.column += s.chars().count(),
        }
        console.print(s)
    }

    fn r#let(&mut self, cursor: &mut Cursor) -> Result<Flow> {
        let var_name = identifier(cursor)?;
        cursor.expect(&Token::Operator(Operator::Equal), "EXPECTED =")?;
        let val = self.expression(cursor)?;
        self.vars.store(var_name, val)?;
        Ok(Flow::Next)
    }

    fn r#if(&mut self, cursor: &mut Cursor, console: &mut dyn Console) -> Result<Flow> {
        let condition = self.expression(cursor)?;
        cursor.expect(&Token::Word(Word::Then), "EXPECTED THEN")?;
        let (mut then, otherwise) = cursor.split_else();
        if condition.is_truthy() {
            self.branch(&mut then, console)
        } else if let Some(mut otherwise) = otherwise {
            self.branch(&mut otherwise, console)
        } else {
            Ok(Flow::Next)
        }
    }

    fn branch(&mut self, cursor: &mut Cursor, console: &mut dyn Console) -> Result<Flow> {
        if let Some(Token::Literal(Literal::Number(_))) = cursor.peek() {
            let pc = self.target(cursor)?;
            cursor.expect_end()?;
            return Ok(Flow::Jump(pc));
        }
        let statement = Statement::classify(cursor)?;
        self.statement(statement, cursor, console)
    }

    fn target(&self, cursor: &mut Cursor) -> Result<usize> {
        let number = match cursor.expect_next()? {
            Token::Literal(Literal::Number(s)) if s.bytes().all(|b| b.is_ascii_digit()) => {
                s.parse::<u16>().ok()
            }
            _ => return Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        };
        match number.and_then(|number| self.program.lookup(number)) {
            Some(pc) => Ok(pc),
            None => Err(error!(UndefinedLine)),
        }
    }

    fn gosub(&mut self, cursor: &mut Cursor) -> Result<Flow> {
        let pc = self.target(cursor)?;
        self.gosubs.push(self.pc)?;
        Ok(Flow::Jump(pc))
    }

    fn r#return(&mut self) -> Result<Flow> {
        if self.gosubs.is_empty() {
            return Err(error!(ReturnWithoutGosub));
        }
        Ok(Flow::Jump(self.gosubs.pop()? + 1))
    }

    fn r#for(&mut self, cursor: &mut Cursor) -> Result<Flow> {
        let var_name = identifier(cursor)?;
        cursor.expect(&Token::Operator(Operator::Equal), "EXPECTED =")?;
        let start = self.number(cursor)?;
        cursor.expect(&Token::Word(Word::To), "EXPECTED TO")?;
        let limit = self.number(cursor)?;
        let step = if cursor.next_if_word(Word::Step) {
            self.number(cursor)?
        } else {
            1.0
        };
        if let Some(index) = self.loops.rposition(|frame| &*frame.var == var_name) {
            self.loops.truncate(index);
        }
        self.vars.store(var_name, Val::Number(start))?;
        self.loops.push(Frame {
            var: var_name.into(),
            limit,
            step,
            resume: self.pc + 1,
        })?;
        Ok(Flow::Next)
    }

    fn next(&mut self, cursor: &mut Cursor) -> Result<Flow> {
        if cursor.is_empty() {
            return match self.loops.len().checked_sub(1) {
                Some(index) => self.next_frame(index),
                None => Err(error!(EndOfProgram)),
            };
        }
        let mut var_names = vec![identifier(cursor)?];
        while let Some(Token::Comma) = cursor.peek() {
            cursor.next();
            var_names.push(identifier(cursor)?);
        }
        for var_name in var_names {
            let index = match self.loops.rposition(|frame| &*frame.var == var_name) {
                Some(index) => index,
                None => return Err(error!(NextWithoutFor)),
            };
            if let Flow::Jump(pc) = self.next_frame(index)? {
                return Ok(Flow::Jump(pc));
            }
        }
        Ok(Flow::Next)
    }

    /// Steps the loop at `index`, discarding any loops opened inside it.
    fn next_frame(&mut self, index: usize) -> Result<Flow> {
        self.loops.truncate(index + 1);
        let frame = match self.loops.last() {
            Some(frame) => frame.clone(),
            None => return Err(error!(InternalError; "LOOP FRAME")),
        };
        let current = match self.vars.fetch(&frame.var) {
            Some(val) => f64::try_from(val.clone())?,
            None => return Err(error!(UndefinedVariable)),
        };
        let current = current + frame.step;
        self.vars.store(&frame.var, Val::Number(current))?;
        let looping = if frame.step < 0.0 {
            current >= frame.limit
        } else {
            current <= frame.limit
        };
        if looping {
            Ok(Flow::Jump(frame.resume))
        } else {
            self.loops.pop()?;
            Ok(Flow::Next)
        }
    }

    fn read(&mut self, cursor: &mut Cursor) -> Result<Flow> {
        if cursor.is_empty() {
            return Err(error!(EndOfProgram));
        }
        while let Some(token) = cursor.next() {
            match token {
                Token::Comma => {}
                Token::Ident(var_name) => {
                    let val = self.program.data_mut().read()?;
                    self.vars.store(var_name, val)?;
                }
                _ => return Err(error!(ExpectedIdentifier)),
            }
        }
        Ok(Flow::Next)
    }

    fn print(&mut self, cursor: &mut Cursor, console: &mut dyn Console) -> Result<Flow> {
        let mut newline = true;
        while let Some(token) = cursor.peek() {
            match token {
                Token::Semicolon => {
                    cursor.next();
                    newline = false;
                }
                Token::Comma => {
                    cursor.next();
                    let pad = PRINT_ZONE - self.column % PRINT_ZONE;
                    self.write(console, &" ".repeat(pad))?;
                    newline = false;
                }
                _ => {
                    let val = self.expression(cursor)?;
                    self.write(console, &val.to_print_string())?;
                    newline = true;
                }
            }
        }
        if newline {
            self.write(console, "\n")?;
        }
        Ok(Flow::Next)
    }

    fn input(&mut self, cursor: &mut Cursor, console: &mut dyn Console) -> Result<Flow> {
        let mut prompt = "? ";
        if let Some(Token::Literal(Literal::String(s))) = cursor.peek() {
            cursor.next();
            match cursor.expect_next()? {
                Token::Comma | Token::Semicolon => prompt = s.as_str(),
                _ => return Err(error!(SyntaxError; "EXPECTED SEPARATOR")),
            }
        }
        let var_name = identifier(cursor)?;
        cursor.expect_end()?;
        let line = console.input(prompt)?;
        self.column = 0;
        let val = match line.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Val::Number(n),
            _ => Val::from(line.as_str()),
        };
        self.vars.store(var_name, val)?;
        Ok(Flow::Next)
    }

    /// Line number of the statement that would run next.
    pub fn line_number(&self) -> LineNumber {
        self.program.line(self.pc).and_then(|line| line.number())
    }
}

fn identifier<'a>(cursor: &mut Cursor<'a>) -> Result<&'a str> {
    match cursor.expect_next()? {
        Token::Ident(name) => Ok(name.as_str()),
        _ => Err(error!(ExpectedIdentifier)),
    }
}
