use clap::Parser;
use vbase_fixtures::utils::logger;
use vbase_fixtures::{
    FixtureEnv, FixtureRunner, LocalStorage, PipelineArgs, PipelineFixture, RootPolicy,
};

fn main() -> anyhow::Result<()> {
    let args = PipelineArgs::parse();

    logger::init_from_env();

    tracing::info!("Starting test data processing...");
    tracing::info!("Command line arguments: {:?}", args);

    // Under vbase_env_runner the host's per-env data dir is mounted at /data;
    // outputs go to /data/output and logs to /data/logs.
    let env = FixtureEnv::from_env(RootPolicy::standard());
    let storage = LocalStorage::new(&env.data_root);

    let fixture = PipelineFixture::new(env, args.test_mode);
    FixtureRunner::new(fixture, storage).run()?;
    Ok(())
}
