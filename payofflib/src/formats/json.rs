//! JSON: массив долгов на входе, `{ "summary": ..., "schedule": ... }` на выходе.
//! Суммы пишутся как есть, без округления.

use crate::{error::Result, model::Debt, summary::Report};
use std::io::{BufRead, Write};

pub struct Json;

impl crate::traits::ReadFormat for Json {
    fn read<R: BufRead>(r: R) -> Result<Vec<Debt>> {
        Ok(serde_json::from_reader(r)?)
    }
}

impl crate::traits::WriteFormat for Json {
    fn write<W: Write>(mut w: W, report: &Report) -> Result<()> {
        serde_json::to_writer_pretty(&mut w, report)?;
        w.write_all(b"\n")?;
        Ok(())
    }
}
