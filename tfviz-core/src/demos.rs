/// Built-in demonstration galleries rendered by both front-ends
use crate::error::Result;
use crate::geometry::{Shape2, Shape3};
use crate::scene::{Scene, TransformMatrix};
use crate::transform2::{Reflection2, Transform2};
use crate::transform3::{Axis3, Reflection3, Shear3, Transform3};

/// Planar demos: each applies one transformation to the unit square.
pub fn planar_gallery() -> Result<Vec<Scene>> {
    let square = Shape2::unit_square;
    let scenes = vec![
        Scene::new(
            "Translation (tx=2, ty=1)",
            square(),
            TransformMatrix::Planar(Transform2::translation(2.0, 1.0)?),
        )?,
        Scene::new(
            "Rotation (45 deg)",
            square(),
            TransformMatrix::Planar(Transform2::rotation(45f32.to_radians())?),
        )?,
        Scene::new(
            "Scaling (sx=2, sy=2)",
            square(),
            TransformMatrix::Planar(Transform2::scaling(2.0, 2.0)?),
        )?,
        Scene::new(
            "Shearing (shx=2)",
            square(),
            TransformMatrix::Planar(Transform2::shearing(2.0, 0.0)?),
        )?,
        Scene::new(
            "Reflection about origin",
            square(),
            TransformMatrix::Planar(Transform2::reflection(Reflection2::Origin)),
        )?,
        Scene::new(
            "Combined (translate, scale, rotate)",
            square(),
            TransformMatrix::Planar(Transform2::compose(&[
                Transform2::translation(2.0, 1.0)?,
                Transform2::scaling(2.0, 2.0)?,
                Transform2::rotation(45f32.to_radians())?,
            ])),
        )?,
    ];
    Ok(scenes)
}

/// Spatial demos: each applies one transformation to the unit cube.
pub fn spatial_gallery() -> Result<Vec<Scene>> {
    let cube = Shape3::unit_cube;
    let scenes = vec![
        Scene::new(
            "Translation (2, 1, 0.5)",
            cube(),
            TransformMatrix::Spatial(Transform3::translation(2.0, 1.0, 0.5)?),
        )?,
        Scene::new(
            "Rotation about X (45 deg)",
            cube(),
            TransformMatrix::Spatial(Transform3::rotation(Axis3::X, 45f32.to_radians())?),
        )?,
        Scene::new(
            "Scaling (2, 2, 1.5)",
            cube(),
            TransformMatrix::Spatial(Transform3::scaling(2.0, 2.0, 1.5)?),
        )?,
        Scene::new(
            "Shearing (shx=2)",
            cube(),
            TransformMatrix::Spatial(Transform3::shearing(Shear3::along_x(2.0))?),
        )?,
        Scene::new(
            "Reflection through origin",
            cube(),
            TransformMatrix::Spatial(Transform3::reflection(Reflection3::Origin)),
        )?,
        Scene::new(
            "Combined (scale, rotate X, translate)",
            cube(),
            TransformMatrix::Spatial(Transform3::compose(&[
                Transform3::scaling(1.2, 0.8, 1.5)?,
                Transform3::rotation(Axis3::X, 30f32.to_radians())?,
                Transform3::translation(1.0, 1.0, 0.5)?,
            ])),
        )?,
    ];
    Ok(scenes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Dim;

    #[test]
    fn test_galleries_build() {
        let planar = planar_gallery().unwrap();
        assert_eq!(planar.len(), 6);
        assert!(planar.iter().all(|s| s.dim() == Dim::Planar));

        let spatial = spatial_gallery().unwrap();
        assert_eq!(spatial.len(), 6);
        assert!(spatial.iter().all(|s| s.dim() == Dim::Spatial));
    }

    #[test]
    fn test_titles_are_unique() {
        let planar = planar_gallery().unwrap();
        let mut titles: Vec<_> = planar.iter().map(|s| s.title().to_string()).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), 6);
    }
}
