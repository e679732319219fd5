use anyhow::Result;
use invasion_game::{GameConfig, InvasionApp};
use invasion_sdl2::App;
use invasion_sdl2::{SdlContext, SdlInitInfo};

pub fn run() -> Result<()> {
    run_with(GameConfig::default())
}

pub fn run_with(config: GameConfig) -> Result<()> {
    let app = InvasionApp::new(config)?;
    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .build();
    log::info!("Starting {}", init_info.title);
    SdlContext::run(init_info, app)?;
    Ok(())
}
