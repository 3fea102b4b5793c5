use vbase_fixtures::utils::logger;
use vbase_fixtures::{ComplexFixture, FixtureEnv, FixtureRunner, LocalStorage, RootPolicy};

fn main() -> anyhow::Result<()> {
    logger::init_from_env();

    let env = FixtureEnv::from_env(RootPolicy::legacy());
    let storage = LocalStorage::new(&env.data_root);

    FixtureRunner::new(ComplexFixture::default(), storage).run()?;
    Ok(())
}
