use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::*;
use crate::events::*;
use crate::program::SoulboundToken as SoulboundTokenProgram;

/// Create the registry and bind the deployer as its administrator
pub fn initialize_registry(
    ctx: Context<InitializeRegistry>,
    name: String,
    symbol: String,
) -> Result<()> {
    let administrator = ctx.accounts.administrator.key();
    let upgrade_authority = ctx.accounts.program_data.upgrade_authority_address;
    let clock = Clock::get()?;

    let registry = &mut ctx.accounts.registry;
    registry.initialize(administrator, upgrade_authority, name, symbol, clock.unix_timestamp)?;
    registry.bump = ctx.bumps.registry;

    emit!(RegistryInitialized {
        administrator,
        name: registry.name.clone(),
        symbol: registry.symbol.clone(),
    });

    msg!("Registry {} ({}) initialized, administrator: {}",
        registry.name, registry.symbol, administrator);

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    /// The deployer, becomes the registry administrator
    #[account(mut)]
    pub administrator: Signer<'info>,

    /// Registry PDA
    #[account(
        init,
        payer = administrator,
        space = Registry::LEN,
        seeds = [Registry::SEED_PREFIX],
        bump
    )]
    pub registry: Account<'info, Registry>,

    /// This program, used to locate its program data account
    #[account(
        constraint = program.programdata_address()? == Some(program_data.key())
            @ SoulboundError::Unauthorized,
    )]
    pub program: Program<'info, SoulboundTokenProgram>,

    /// Program data holding the upgrade authority
    #[account(
        constraint = program_data.upgrade_authority_address == Some(administrator.key())
            @ SoulboundError::Unauthorized,
    )]
    pub program_data: Account<'info, ProgramData>,

    /// System program
    pub system_program: Program<'info, System>,
}
