use anyhow::Result;
use gridmat::{dot, matrix, Matrix};

fn main() -> Result<()> {
    env_logger::init();

    let m1 = matrix![[1, 2, 3], [4, 5, 6]]?;
    let m2 = matrix![[7, 8], [9, 10], [11, 12]]?;

    let m3 = dot(&m1, &m2)?;
    log::info!("{} x {} -> {}", m1.shape(), m2.shape(), m3.shape());
    println!("Result of matrix multiplication:");
    println!("{m3}");
    println!("Transposed: {}", m3.transposed());
    Ok(())
}
