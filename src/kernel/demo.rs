//! Demo project loaded at startup.

use super::buffers::BufferStore;
use crate::models::{NodeId, NodeKind, ProjectTree};

/// Ids handed out by the user start here, above every seed id.
pub const FIRST_USER_NODE_ID: u64 = 20;

pub const ESCROW_RS: &str = r#"use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod escrow {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, amount: u64) -> Result<()> {
        let escrow_account = &mut ctx.accounts.escrow_account;
        escrow_account.initializer_key = *ctx.accounts.initializer.key;
        escrow_account.temp_token_account_key = *ctx.accounts.temp_token_account.key;
        escrow_account.initializer_deposit_token_account_key =
            *ctx.accounts.initializer_deposit_token_account.key;
        escrow_account.initializer_receive_token_account_key =
            *ctx.accounts.initializer_receive_token_account.key;
        escrow_account.expected_amount = amount;

        Ok(())
    }
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub initializer: Signer<'info>,
    #[account(
        init,
        payer = initializer,
        space = 8 + EscrowAccount::LEN
    )]
    pub escrow_account: Account<'info, EscrowAccount>,
    pub system_program: Program<'info, System>,
}

#[account]
pub struct EscrowAccount {
    pub initializer_key: Pubkey,
    pub temp_token_account_key: Pubkey,
    pub initializer_deposit_token_account_key: Pubkey,
    pub initializer_receive_token_account_key: Pubkey,
    pub expected_amount: u64,
}

impl EscrowAccount {
    pub const LEN: usize = 32 + 32 + 32 + 32 + 8;
}"#;

pub const MAIN_RS: &str = r#"use std::io;

fn main() {
    println!("Welcome to Código - Solana Development Environment!");

    // Initialize the development environment
    init_solana_environment();
}

fn init_solana_environment() {
    println!("Initializing Solana development tools...");
    // Setup code here
}"#;

pub const CARGO_TOML: &str = r#"[package]
name = "codigo-solana-project"
version = "0.1.0"
edition = "2021"

[dependencies]
anchor-lang = "0.28.0"
anchor-spl = "0.28.0"
solana-program = "1.16.0"

[dev-dependencies]
tokio = { version = "1.0", features = ["full"] }"#;

struct Seed {
    id: u64,
    parent: Option<u64>,
    name: &'static str,
    kind: NodeKind,
    expanded: bool,
    content: Option<&'static str>,
}

const fn folder(id: u64, parent: Option<u64>, name: &'static str, expanded: bool) -> Seed {
    Seed {
        id,
        parent,
        name,
        kind: NodeKind::Folder,
        expanded,
        content: None,
    }
}

const fn file(id: u64, parent: Option<u64>, name: &'static str, content: Option<&'static str>) -> Seed {
    Seed {
        id,
        parent,
        name,
        kind: NodeKind::File,
        expanded: false,
        content,
    }
}

const SEEDS: &[Seed] = &[
    folder(1, None, "src", true),
    folder(2, Some(1), "lib", false),
    file(3, Some(2), "lib.rs", None),
    file(4, Some(2), "utils.rs", None),
    folder(5, Some(1), "programs", true),
    file(6, Some(5), "escrow.rs", Some(ESCROW_RS)),
    file(7, Some(5), "token.rs", None),
    file(8, Some(1), "main.rs", Some(MAIN_RS)),
    folder(9, None, "tests", false),
    file(10, Some(9), "integration.rs", None),
    file(11, None, "Cargo.toml", Some(CARGO_TOML)),
    file(12, None, "README.md", None),
];

pub fn demo_project() -> (ProjectTree, BufferStore) {
    let mut tree = ProjectTree::new();
    let mut buffers = BufferStore::new();

    for seed in SEEDS {
        let id = NodeId::new(seed.id);
        let parent = seed.parent.map(NodeId::new);
        if let Err(err) = tree.insert_with_id(parent, id, seed.name, seed.kind) {
            tracing::error!(id = seed.id, error = %err, "bad demo seed");
            continue;
        }
        if let Some(content) = seed.content {
            buffers.set_content(id, content);
        }
    }

    // Inserting children expands their parent; restore the seeded flags.
    for seed in SEEDS.iter().filter(|s| s.kind == NodeKind::Folder) {
        tree.set_expanded(NodeId::new(seed.id), seed.expanded);
    }

    tree.reserve_ids_below(FIRST_USER_NODE_ID);
    (tree, buffers)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/demo.rs"]
mod tests;
