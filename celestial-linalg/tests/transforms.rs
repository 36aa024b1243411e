//! Worked transform scenarios with known answers.

use celestial_linalg::test_helpers::{assert_float_eq_f32, assert_matrix_near, assert_vector_near};
use celestial_linalg::{
    declare_space, LookAtContext, Matrix3, Matrix3D, Matrix4, Matrix4D, Matrix4F, Vector3,
    Vector3D, Vector4, Vector4D,
};
use std::f64::consts::FRAC_PI_2;

declare_space!(
    /// Object-local coordinates.
    Model,
    /// Camera coordinates.
    Eye,
);

#[test]
fn translate_after_rotate_round_trip() {
    let m = Matrix4D::make_translation(Vector3D::new(1.0, 2.0, 3.0))
        * Matrix4D::make_rotation_z(FRAC_PI_2);

    let origin = Vector4D::new(0.0, 0.0, 0.0, 1.0);
    let moved = m * origin;
    assert_eq!(moved, Vector4D::new(1.0, 2.0, 3.0, 1.0));

    let inv = m.invert().expect("rigid transform is invertible");
    assert_vector_near(&(inv * moved), &origin, 1e-14);

    // +X is turned onto +Y before the translation
    let tip = m * Vector4D::new(1.0, 0.0, 0.0, 1.0);
    assert_vector_near(&tip, &Vector4D::new(1.0, 3.0, 3.0, 1.0), 1e-14);
}

#[test]
fn products_and_dot_examples() {
    let x = Vector3D::new(1.0, 0.0, 0.0);
    let y = Vector3D::new(0.0, 1.0, 0.0);
    assert_eq!(x.cross(&y), Vector3D::new(0.0, 0.0, 1.0));
    assert_eq!(Vector3D::new(1.0, 2.0, 3.0).dot(&Vector3D::new(4.0, 5.0, 6.0)), 32.0);
}

#[test]
fn identity_determinant_and_inverse() {
    assert_eq!(Matrix3D::identity().determinant(), 1.0);
    assert_eq!(Matrix4D::identity().determinant(), 1.0);
    assert_eq!(Matrix3D::zero().determinant(), 0.0);
    assert_eq!(Matrix4D::zero().determinant(), 0.0);
    assert_eq!(Matrix3D::identity().invert(), Some(Matrix3D::identity()));
    assert_eq!(Matrix4F::identity().invert(), Some(Matrix4F::identity()));
}

#[test]
fn column_major_buffer_for_upload() {
    let m = Matrix4F::make_translation(celestial_linalg::Vector3F::new(7.0, 8.0, 9.0));
    let buffer = m.as_slice();
    assert_eq!(buffer.len(), 16);
    assert_eq!(&buffer[12..16], &[7.0, 8.0, 9.0, 1.0]);
    for (i, &value) in buffer.iter().enumerate() {
        let (row, col) = (i % 4, i / 4);
        assert_eq!(value, m.get(row, col));
    }
}

#[test]
fn tagged_pipeline_model_to_eye() {
    let model_to_eye = Matrix4::<f64, Eye>::look_at(
        &Vector3::<f64, Eye>::new(0.0, 0.0, 10.0),
        &Vector3::<f64, Eye>::zeros(),
        &Vector3::<f64, Eye>::y_axis(),
    );
    let point_in_model = Vector4::<f64, Model>::new(1.0, 2.0, 0.0, 1.0);

    // The point is moved into the eye space explicitly before the transform.
    let p = model_to_eye * point_in_model.retag::<Eye>();
    assert_vector_near(&p, &Vector4::<f64, Eye>::new(1.0, 2.0, -10.0, 1.0), 1e-14);
}

#[test]
fn look_at_context_is_reusable_across_calls() {
    let mut ctx: LookAtContext<f64> = LookAtContext::new();
    let up = Vector3D::y_axis();
    let target = Vector3D::zeros();

    let eyes = [
        Vector3D::new(4.0, 1.0, 2.0),
        Vector3D::new(-3.0, 2.0, 5.0),
        Vector3D::new(0.5, -1.0, -6.0),
    ];
    for eye in eyes {
        let with_ctx = Matrix4D::look_at_with_context(&mut ctx, &eye, &target, &up);
        let fresh = Matrix4D::look_at(&eye, &target, &up);
        assert_eq!(with_ctx, fresh);

        let (rot, trans) = Matrix3D::look_at_with_context(&mut ctx, &eye, &target, &up);
        assert_eq!(rot, fresh.upper_left());
        assert_eq!(trans, -eye);

        // rows of the rotation form a right-handed orthonormal basis
        assert!((rot.determinant() - 1.0).abs() < 1e-14);
        assert_matrix_near(&rot.multiply(&rot.transpose()), &Matrix3D::identity(), 1e-14);
    }
}

#[test]
fn homogeneous_2d_translation_and_rotation() {
    let m = Matrix3D::make_translation(celestial_linalg::Vector2D::new(2.0, 0.0))
        * Matrix3D::make_rotation_z(FRAC_PI_2);
    let p = m * Vector3D::new(1.0, 0.0, 1.0);
    assert_vector_near(&p, &Vector3D::new(2.0, 1.0, 1.0), 1e-14);

    let back = m.invert().expect("invertible") * p;
    assert_vector_near(&back, &Vector3D::new(1.0, 0.0, 1.0), 1e-14);
}

#[test]
fn tagged_matrix3_keeps_its_space() {
    let r = Matrix3::<f32, Model>::make_rotation_x(0.0);
    assert_eq!(r, Matrix3::<f32, Model>::identity());
    assert_float_eq_f32(r.trace(), 3.0, 0);

    let turned = Matrix3::<f32, Model>::make_rotation_x(0.25);
    assert_float_eq_f32(turned.determinant(), 1.0, 8);
}
