use devlog_core::LedgerStore;

use crate::app::AppContext;

pub fn handle_next(ctx: &AppContext) -> anyhow::Result<()> {
    let ledger = ctx.open_ledger()?;
    let number = ledger.next_entry_number()?;
    println!("{:03}", number);
    Ok(())
}
