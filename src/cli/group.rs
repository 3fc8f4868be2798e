//! Group CLI commands
//!
//! Implements CLI commands for group management.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::group::{format_group_details, format_group_list};
use crate::error::{GroupSplitError, GroupSplitResult};
use crate::models::MemberId;
use crate::services::GroupService;
use crate::storage::Storage;

/// Group subcommands
#[derive(Subcommand)]
pub enum GroupCommands {
    /// Create a new group
    Create {
        /// Group name
        name: String,
        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
        /// Members to add (repeat or separate with commas)
        #[arg(short, long = "member", value_delimiter = ',')]
        members: Vec<String>,
        /// Member creating the group (defaults to the configured default member)
        #[arg(short, long)]
        creator: Option<String>,
    },
    /// List all groups
    List,
    /// Show group details
    Show {
        /// Group name or ID
        group: String,
    },
    /// Add a member to a group
    AddMember {
        /// Group name or ID
        group: String,
        /// Member to add
        member: String,
    },
}

/// Handle a group command
pub fn handle_group_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GroupCommands,
) -> GroupSplitResult<()> {
    let service = GroupService::new(storage);

    match cmd {
        GroupCommands::Create {
            name,
            description,
            members,
            creator,
        } => {
            let members = members
                .iter()
                .map(|m| MemberId::parse(m))
                .collect::<GroupSplitResult<Vec<_>>>()?;

            let creator = match creator.or_else(|| settings.default_member.clone()) {
                Some(creator) => MemberId::parse(&creator)?,
                None => members.first().cloned().ok_or_else(|| {
                    GroupSplitError::Validation(
                        "A group needs at least one member. Use --creator or --member.".into(),
                    )
                })?,
            };

            let group = service.create(&name, description.as_deref(), creator, members)?;

            println!("Created group: {}", group.name);
            println!(
                "  Members: {}",
                group
                    .members
                    .iter()
                    .map(MemberId::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            println!("  ID: {}", group.id.as_uuid());
        }

        GroupCommands::List => {
            let groups = service.list()?;
            print!("{}", format_group_list(&groups));
        }

        GroupCommands::Show { group } => {
            let group = service.require(&group)?;
            let expense_count = storage.expenses.get_by_group(group.id)?.len();
            print!("{}", format_group_details(&group, expense_count));
        }

        GroupCommands::AddMember { group, member } => {
            let group = service.require(&group)?;
            let member = MemberId::parse(&member)?;

            if group.has_member(&member) {
                println!("{} is already a member of {}", member, group.name);
                return Ok(());
            }

            let updated = service.add_member(group.id, member.clone())?;
            println!(
                "Added {} to {} ({} members)",
                member,
                updated.name,
                updated.members.len()
            );
        }
    }

    Ok(())
}
