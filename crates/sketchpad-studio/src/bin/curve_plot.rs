use sketchpad_engine::core::SceneConfig;
use sketchpad_studio::scenes::CurvePlotScene;

fn main() {
    sketchpad_studio::launch(SceneConfig::new("Curve plot", 900, 600, 60), CurvePlotScene);
}
