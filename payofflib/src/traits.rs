//! Унифицированные трэйты чтения долгов и записи плана на основе std::io::{BufRead, Write}.

use crate::{error::Result, model::Debt, summary::Report};
use std::io::{BufRead, Write};

pub trait ReadFormat {
    fn read<R: BufRead>(r: R) -> Result<Vec<Debt>>;
}

pub trait WriteFormat {
    fn write<W: Write>(w: W, report: &Report) -> Result<()>;
}
