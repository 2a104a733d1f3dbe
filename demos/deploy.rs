use switchbind::derive::*;
use switchbind::Switches;

#[derive(Debug, Default, PartialEq, Eq, Enumeration)]
enum Strategy {
    #[default]
    Rolling,
    #[switch(name = "BlueGreen")]
    Swap,
    Recreate,
}

#[derive(Debug, Default, Switches)]
struct Deploy {
    #[switch(name = "Target")]
    pub target: String,
    #[switch(name = "Replicas")]
    pub replicas: u16,
    #[switch(name = "Strategy")]
    pub strategy: Strategy,
    #[switch(name = "Hosts")]
    pub hosts: Vec<String>,
    #[switch(name = "Timeout")]
    pub timeout: Option<u64>,
    #[switch(name = "DryRun")]
    pub dry_run: bool,
}

fn main() {
    let deploy = Deploy::from_env();

    if deploy.dry_run {
        println!("(dry run)");
    }

    println!(
        "Deploying '{}' x{} via {:?} onto {:?}.",
        deploy.target, deploy.replicas, deploy.strategy, deploy.hosts
    );

    if let Some(timeout) = deploy.timeout {
        println!("Timeout: {timeout}s");
    }
}
