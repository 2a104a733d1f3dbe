use std::net::SocketAddr;
use std::str::FromStr;
use switchbind::{
    coerce, BindError, Catalog, Collection, Optional, Scalar, Switch, SwitchBinder, Switches,
};

#[derive(Debug, PartialEq, Eq)]
struct Percent(u8);

impl FromStr for Percent {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.strip_suffix('%').map(u8::from_str) {
            Some(Ok(percent)) if percent <= 100 => Ok(Percent(percent)),
            _ => Err("expected a percentage between 0% and 100%".to_string()),
        }
    }
}

coerce!(parse: Percent);

#[derive(Debug, PartialEq, Eq)]
pub struct Params {
    verbose: bool,
    listen: SocketAddr,
    threshold: Option<Percent>,
    peers: Vec<SocketAddr>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            verbose: false,
            listen: SocketAddr::from(([127, 0, 0, 1], 8080)),
            threshold: None,
            peers: Vec::default(),
        }
    }
}

impl Switches for Params {
    fn catalog() -> Result<Catalog<Self>, BindError> {
        Catalog::new()
            .add("Verbose", Switch::new(|p: &mut Params| &mut p.verbose))?
            .add("Listen", Scalar::new(|p: &mut Params| &mut p.listen))?
            .add("Threshold", Optional::new(|p: &mut Params| &mut p.threshold))?
            .add("Peers", Collection::new(|p: &mut Params| &mut p.peers))
    }
}

fn main() {
    let mut params = Params::default();
    SwitchBinder::default().bind_env(&mut params);
    println!("{params:?}");
}
