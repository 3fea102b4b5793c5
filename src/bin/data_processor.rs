use vbase_fixtures::utils::logger;
use vbase_fixtures::{DataProcessorFixture, FixtureEnv, FixtureRunner, LocalStorage, RootPolicy};

fn main() -> anyhow::Result<()> {
    logger::init_from_env();

    let env = FixtureEnv::from_env(RootPolicy::legacy());
    let storage = LocalStorage::new(&env.data_root);

    let report = FixtureRunner::new(DataProcessorFixture, storage).run()?;
    tracing::debug!("{:?}", report);
    Ok(())
}
