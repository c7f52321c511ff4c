pub mod create_release_builder;

use anyhow::Result;

pub trait BuilderExecutor {
    type Output;

    #[allow(async_fn_in_trait)]
    async fn execute(self) -> Result<Self::Output>;
}
