use clap::Subcommand;

use super::print_json;
use crate::profile::{add_profile_in, init_profiles_in, load_user_profile, profiles_dir};

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Create the profiles folder and a default main profile
    Init,
    /// New profile cloned from main
    Add { name: String },
    /// Print the effective config of the selected profile
    Show,
}

pub fn handle_profile_command(cmd: ProfileCommands, profile: &str) -> anyhow::Result<()> {
    match cmd {
        ProfileCommands::Init => {
            let path = init_profiles_in(&profiles_dir()?)?;
            println!("{}", path.display());
        }
        ProfileCommands::Add { name } => {
            let path = add_profile_in(&profiles_dir()?, &name)?;
            println!("{}", path.display());
        }
        ProfileCommands::Show => {
            let config = load_user_profile(profile)?.with_env_overrides();
            print_json(&config)?;
        }
    }

    Ok(())
}
