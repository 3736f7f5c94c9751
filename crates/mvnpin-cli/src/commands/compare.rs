//! Handler for `mvnpin compare`.

use miette::Result;

pub fn exec(a: &str, b: &str) -> Result<()> {
    println!("{}", mvnpin_ops::ops_compare::compare(a, b));
    Ok(())
}
