use anyhow::Result;

use crate::context::ExecutionContext;

pub fn handle_unlock(ctx: &ExecutionContext, code: &str) -> Result<()> {
    let mut store = ctx.open_store()?;
    ctx.gate().unlock(&mut store, code)?;
    println!("Access granted. Welcome to the event.");
    Ok(())
}

pub fn handle_lock(ctx: &ExecutionContext) -> Result<()> {
    let mut store = ctx.open_store()?;
    ctx.gate().lock(&mut store)?;
    println!("Locked. Enter the access code again with 'venue unlock <code>'.");
    Ok(())
}
