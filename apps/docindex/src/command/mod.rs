pub mod generate;

use crate::error::Result;

pub use generate::GenerateCommand;

pub trait Command {
    fn execute(&self) -> Result<()>;
}
