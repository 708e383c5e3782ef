use sketchpad_engine::core::SceneConfig;
use sketchpad_studio::scenes::SketchScene;

fn main() {
    sketchpad_studio::launch(SceneConfig::new("OpenGL", 900, 600, 20), SketchScene::new());
}
