use vbase_fixtures::utils::logger;
use vbase_fixtures::{FixtureEnv, FixtureRunner, LocalStorage, RootPolicy, SimpleFixture};

fn main() -> anyhow::Result<()> {
    logger::init_from_env();

    // VBASE_DATA_ROOT overrides the /data container mount for local runs
    let env = FixtureEnv::from_env(RootPolicy::standard());
    let storage = LocalStorage::new(&env.data_root);

    FixtureRunner::new(SimpleFixture, storage).run()?;
    Ok(())
}
