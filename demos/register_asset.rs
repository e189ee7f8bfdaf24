use asset_core::{
    access::Role,
    config::Config,
    error::{Error, Result},
    models::{
        Modifications,

        asset::{Asset, AssetID},
        asset_class::{AssetClass, AssetClassID},
        asset_fin_det::{AssetFinDet, AssetFinDetID},
        asset_ownership::{AssetOwnershipID, Owner},
        asset_type::{AssetType, AssetTypeID},
        asset_type_operation::AssetTypeOperationID,
        asset_type_ownership::AssetTypeOwnershipID,
        lib::{entity::Model, lookup::Lookup},
        project::ProjectID,
        user::{User, UserID},
    },
    money::Money,
    store::MemoryStore,
    transactions::{
        asset,
        asset_class,
        asset_fin_det,
        asset_ownership,
        asset_type,
        asset_type_operation,
        asset_type_ownership,
        project,
    },
};
use chrono::{NaiveDate, Utc};
use rust_decimal_macros::dec;

fn make_user(id: &str, name: &str, roles: Vec<Role>) -> Result<User> {
    let now = Utc::now();
    User::builder()
        .id(UserID::new(id))
        .roles(roles)
        .email(format!("{}@airport.example", id))
        .name(name)
        .active(true)
        .created(now.clone())
        .updated(now)
        .build()
        .map_err(|e| Error::BuilderFailed(e))
}

/// Grab the first model out of a transaction's result, then persist it.
fn save<T: Model>(store: &mut MemoryStore, mods: Modifications) -> Result<T> {
    let first = mods.iter().next().cloned();
    store.apply(mods)?;
    match first {
        Some(modification) => {
            let op = modification.op().clone();
            modification.expect_op::<T>(op)
        }
        None => Err(Error::ObjectNotFound("modification".into())),
    }
}

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| Error::MissingFields(vec!["date".into()]))
}

fn example() -> Result<()> {
    let now = Utc::now();
    let config = Config::default();
    let mut store = MemoryStore::new();
    let assets = make_user("amanda", "Amanda", vec![Role::AssetManager])?;
    let projects = make_user("pete", "Pete", vec![Role::ProjectManager])?;

    // classification tables first
    let class: AssetClass = save(&mut store, asset_class::create(&assets, AssetClassID::new("c-vehicles"), "Vehicles", "Things with wheels", true, &now)?)?;
    let ty: AssetType = save(&mut store, asset_type::create(&assets, AssetTypeID::new("t-tug"), "Tug", "Pulls baggage carts", &class, true, &now)?)?;

    // a project to pay for things
    let project_id = ProjectID::new("p-fleet-2020");
    project::create(&projects, project_id.clone(), "Fleet renewal 2020", "Replace the oldest tugs", date(2020, 1, 1)?, Some(date(2020, 12, 31)?), true, &now)
        .and_then(|mods| store.apply(mods))?;

    // registering an asset creates its financial details along with it
    let tug: Asset = save(&mut store, asset::create(&assets, &config, AssetID::new("a-1"), AssetFinDetID::new("f-1"), 1, "Baggage tug #1", &ty, true, &now)?)?;
    println!("registered {} ({})", tug.number(), tug.desc());

    // the project manager attributes the purchase to their project. no date
    // was given so it defaults to the project's start.
    let fin_det = store.fin_det_for(tug.id()).cloned()
        .ok_or_else(|| Error::ObjectNotFound("asset financial details".into()))?;
    let mods = asset_fin_det::update(&projects, &store, fin_det, Some(Some(Money::new(dec!(48250.00)))), None, Some(Some(project_id.clone())), &now)?;
    let fin_det: AssetFinDet = save(&mut store, mods)?;
    println!("  cost {:?}, acquired {:?}", fin_det.init_cost().as_ref().map(|c| c.to_string()), fin_det.acquire_date());

    // a date outside of the project is refused and nothing changes
    let res = asset_fin_det::update(&projects, &store, fin_det.clone(), None, Some(Some(date(2019, 6, 1)?)), None, &now);
    match res {
        Err(err) => println!("  refused 2019-06-01: {}", err),
        Ok(_) => println!("  that should not have worked"),
    }

    // hand it to the ramp
    asset_ownership::create(&assets, AssetOwnershipID::new("o-1"), &tug, Owner::BusinessUnit("Ramp Operations".into()), date(2020, 1, 15)?, &now)
        .and_then(|mods| store.apply(mods))?;
    if let Some(ownership) = store.current_ownership(tug.id(), Some(&date(2020, 3, 1)?)) {
        println!("  owned by {} ({})", ownership.owner().name(), ownership.owner().title());
    }

    // the type as a whole belongs to the fleet team, and is run by a contractor
    asset_type_ownership::create(&assets, AssetTypeOwnershipID::new("to-1"), &ty, Owner::Role("Fleet Manager".into()), date(2020, 1, 1)?, &now)
        .and_then(|mods| store.apply(mods))?;
    asset_type_operation::create(&assets, AssetTypeOperationID::new("op-1"), &ty, Owner::Organisation("Ground Handling Co".into()), date(2020, 1, 1)?, None, &now)
        .and_then(|mods| store.apply(mods))?;
    if let Some(ownership) = store.current_type_ownership(ty.id(), None) {
        println!("{} owned by {}", ty.name(), ownership.owner().name());
    }
    if let Some(operation) = store.current_type_operation(ty.id(), None) {
        println!("{} operated by {}", ty.name(), operation.operator().name());
    }
    Ok(())
}

fn main() {
    if let Err(err) = example() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
