use crate::areas::repository::Repository;
use crate::errors::TwigResult;
use std::io::Write;

impl Repository {
    pub fn status(&self) -> TwigResult<()> {
        let status_info = self.status_info()?;
        write!(self.writer(), "{status_info}")?;

        Ok(())
    }
}
