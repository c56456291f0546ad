use tracing_subscriber::EnvFilter;
use y_support::naming::{Bindings, Error, InstanceOptions, Name, Registry, Rejection};

#[derive(Debug)]
struct Species {
    formula: &'static str,
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("y_support=debug")),
        )
        .init();

    println!("\n[Registry]\n");

    let bindings = Bindings::new();
    let species = Registry::<Species>::builder()
        .bindings(&bindings)
        .on_name_assign(|candidate, species, _| {
            if candidate.is_empty() {
                Err(Rejection::new(format!("{} needs a name", species.formula)))
            } else {
                Ok(candidate.into())
            }
        })
        .on_name_query(|name| Name::from(format!("{name} (species)")))
        .build()?;

    let water = species.instantiate(Species { formula: "H2O" });
    let salt =
        species.instantiate_with(Species { formula: "NaCl" }, InstanceOptions::new().named("Salt"))?;
    let oxygen = species.instantiate(Species { formula: "O2" });

    println!("{species:?}");

    let chemistry = bindings.scope("Chemistry");
    chemistry.bind("Water", water.rc());
    chemistry.bind("Oxygen", oxygen.rc());

    println!("Unnamed after scan: {}", species.scan()?);
    for instance in species.instances() {
        println!("{} => {:?}", instance.formula, species.name_of(&instance)?);
    }

    println!("\n[Collisions]\n");

    match oxygen.set_name("Salt") {
        Ok(()) => println!("Oxygen renamed"),
        Err(error) => println!("{error}"),
    }

    oxygen.steal_name("Salt")?;
    println!("Oxygen => {:?}, NaCl => {:?}", oxygen.name()?, salt.name()?);

    println!("\n[Forgetting]\n");

    let forgotten = species.forget("Water")?;
    println!("Forgot {:?} ({:?})", forgotten.name, forgotten.instance.map(|s| s.formula));

    drop(salt);
    println!("{species:?}");
    println!("Instances left: {}", species.len());

    Ok(())
}
