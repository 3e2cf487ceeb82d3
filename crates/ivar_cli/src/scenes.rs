//! Built-in scenes.

use clap::ValueEnum;
use ivar_renderer::{
    Camera, Color, Dielectric, DiffuseLight, Lambertian, Metal, Point3, RenderSettings, Scene,
    Vec3,
};

/// Preset scenes selectable with `--scene`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Ground, diffuse sphere, hollow glass sphere and a mirror under a bright sky
    Default,
    /// Glass and diffuse spheres lit only by an emissive sphere
    Lights,
    /// A single red triangle against a white background
    Triangle,
}

/// A scene together with its framing and preferred settings.
///
/// The camera is framed for a square image at the preset's own field of
/// view; callers reframe it for the output size.
pub struct Preset {
    pub scene: Scene,
    pub camera: Camera,
    pub settings: RenderSettings,
}

fn framing(look_from: Point3, look_at: Point3, settings: &RenderSettings) -> Camera {
    Camera::new(look_from, look_at, Vec3::Y, 1.0, settings.field_of_view)
}

pub fn build(kind: SceneKind) -> Preset {
    match kind {
        SceneKind::Default => default_scene(),
        SceneKind::Lights => lights_scene(),
        SceneKind::Triangle => triangle_scene(),
    }
}

fn default_scene() -> Preset {
    let mut scene = Scene::new();
    let ground = scene.add_material(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let center = scene.add_material(Lambertian::new(Color::new(0.1, 0.2, 0.5)));
    let left = scene.add_material(Dielectric::new(1.5));
    let right = scene.add_material(Metal::new(Color::new(0.8, 0.6, 0.2), 0.0));

    scene.add_sphere(Point3::new(0.0, -100.5, -1.0), 100.0, ground);
    scene.add_sphere(Point3::new(0.0, 0.0, -1.0), 0.5, center);
    // Negative inner radius makes the glass sphere hollow
    scene.add_sphere(Point3::new(-1.0, 0.0, -1.0), 0.5, left);
    scene.add_sphere(Point3::new(-1.0, 0.0, -1.0), -0.45, left);
    scene.add_sphere(Point3::new(1.0, 0.0, -1.0), 0.5, right);

    let settings = RenderSettings {
        samples_per_pixel: 25,
        field_of_view: 90.0,
        background: Color::new(0.7, 0.8, 1.0),
        ..Default::default()
    };

    Preset {
        scene,
        camera: framing(Point3::new(-2.0, 2.0, 1.0), Point3::new(0.0, 0.0, -1.0), &settings),
        settings,
    }
}

fn lights_scene() -> Preset {
    let mut scene = Scene::new();
    let ground = scene.add_material(Lambertian::new(Color::new(0.8, 0.8, 0.2)));
    let light = scene.add_material(DiffuseLight::new(Color::ONE));
    let blue = scene.add_material(Lambertian::new(Color::new(0.0, 0.0, 1.0)));
    let glass = scene.add_material(Dielectric::new(1.5));

    scene.add_sphere(Point3::new(0.0, -100.5, -1.0), 100.0, ground);
    scene.add_sphere(Point3::new(0.0, 0.0, -1.0), 0.5, glass);
    scene.add_sphere(Point3::new(0.0, 0.0, 0.0), 0.5, blue);
    scene.add_sphere(Point3::new(0.0, 0.0, -2.0), 0.5, light);

    let settings = RenderSettings {
        background: Color::ZERO,
        ..Default::default()
    };

    Preset {
        scene,
        camera: framing(Point3::new(10.0, 5.0, -2.0), Point3::new(0.0, 0.0, -1.0), &settings),
        settings,
    }
}

fn triangle_scene() -> Preset {
    let mut scene = Scene::new();
    let red = scene.add_material(Lambertian::new(Color::new(1.0, 0.0, 0.0)));

    scene.add_triangle(
        Point3::new(1.0, -0.5, 2.0),
        Point3::new(-1.0, -0.5, 2.0),
        Point3::new(0.0, 1.0, 2.0),
        red,
    );

    let settings = RenderSettings {
        samples_per_pixel: 25,
        max_depth: 25,
        field_of_view: 90.0,
        background: Color::ONE,
        ..Default::default()
    };

    Preset {
        scene,
        camera: framing(Point3::ZERO, Point3::new(0.0, 0.0, 1.0), &settings),
        settings,
    }
}
