use inkpost_store::WritingStore;

/// `whoami`: print the device identity, minting it on first use.
pub fn whoami(store: &WritingStore) -> anyhow::Result<()> {
    let identity = store.device_identity()?;
    println!("{}", identity.id());
    println!("{}", identity.display_name());
    Ok(())
}
