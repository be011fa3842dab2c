use anyhow::Result;

use crate::printing::{print_banner, print_controls, print_explanation};

pub fn describe() -> Result<()> {
    print_banner();
    print_explanation();
    print_controls();
    println!("\n💡 Use 'clt-machine run' to draw both charts with the defaults");
    Ok(())
}
