//! Pen-tool authoring session.

use vecpath::{
    AuthoringSession, HandleMirroring, HandleSide, PathSegment, Point, SessionError, SessionState, VertexId,
};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn close_with_too_few_vertices_is_a_no_op() {
    let mut s = AuthoringSession::new();
    let idle = s.close_path();
    assert!(idle.is_empty());
    assert_eq!(s.state(), SessionState::Idle);
    assert_eq!(s.close_path().id, idle.id);

    s.start_path(pt(0.0, 0.0));
    let single = s.close_path();
    assert_eq!(single.segments, vec![PathSegment::MoveTo { to: pt(0.0, 0.0) }]);
    assert!(!single.closed);
    assert_eq!(s.state(), SessionState::Drawing);
}

#[test]
fn drawing_and_closing() {
    let mut s = AuthoringSession::new();
    s.start_path(pt(0.0, 0.0));
    s.add_vertex(pt(10.0, 0.0), None).unwrap();
    s.add_vertex(pt(10.0, 10.0), Some(pt(14.0, 10.0))).unwrap();
    s.add_vertex(pt(0.0, 10.0), None).unwrap();

    let preview = s.current_path();
    assert!(!preview.closed);
    assert_eq!(
        preview.segments[2],
        PathSegment::CubicTo { ctrl1: pt(10.0, 0.0), ctrl2: pt(6.0, 10.0), to: pt(10.0, 10.0) }
    );
    assert_eq!(
        preview.segments[3],
        PathSegment::CubicTo { ctrl1: pt(14.0, 10.0), ctrl2: pt(0.0, 10.0), to: pt(0.0, 10.0) }
    );

    let done = s.close_path();
    assert!(done.closed);
    assert_eq!(done.segments.last(), Some(&PathSegment::Close));
    assert_eq!(s.state(), SessionState::Idle);
    assert!(s.current_path().is_empty());
    assert_ne!(s.current_path().id, done.id);
}

#[test]
fn adding_while_idle_fails() {
    let mut s = AuthoringSession::new();
    assert_eq!(s.add_vertex(pt(1.0, 1.0), None), Err(SessionError::NotDrawing));
}

#[test]
fn unknown_vertices_are_reported() {
    let mut s = AuthoringSession::new();
    s.start_path(pt(0.0, 0.0));
    let ghost = VertexId(7);
    assert_eq!(s.move_vertex(ghost, pt(1.0, 1.0)), Err(SessionError::VertexNotFound(ghost)));
    assert_eq!(s.move_handle(ghost, HandleSide::In, pt(1.0, 1.0)), Err(SessionError::VertexNotFound(ghost)));
    assert_eq!(s.convert_to_corner(ghost), Err(SessionError::VertexNotFound(ghost)));
    assert_eq!(s.convert_to_smooth(ghost), Err(SessionError::VertexNotFound(ghost)));
    assert_eq!(s.delete_vertex(ghost), Err(SessionError::VertexNotFound(ghost)));
    assert_eq!(s.vertex_count(), 1);
}

#[test]
fn smooth_and_corner_conversion() {
    let mut s = AuthoringSession::new();
    s.start_path(pt(0.0, 0.0));
    let mid = s.add_vertex(pt(10.0, 10.0), None).unwrap();
    let last = s.add_vertex(pt(20.0, 0.0), None).unwrap();

    assert_eq!(s.convert_to_smooth(last), Ok(false));
    assert_eq!(s.convert_to_smooth(mid), Ok(true));
    let v = s.vertex(mid).unwrap();
    assert_eq!(v.handle_in, Some(pt(5.0, 10.0)));
    assert_eq!(v.handle_out, Some(pt(15.0, 10.0)));
    assert_eq!(v.handle_mirroring, HandleMirroring::AngleAndLength);

    s.move_handle(mid, HandleSide::Out, pt(10.0, 14.0)).unwrap();
    assert_eq!(s.vertex(mid).unwrap().handle_in, Some(pt(10.0, 6.0)));

    s.convert_to_corner(mid).unwrap();
    let v = s.vertex(mid).unwrap();
    assert!(!v.has_handles());
    assert_eq!(v.handle_mirroring, HandleMirroring::None);
}

#[test]
fn deleted_vertices_drop_out_of_the_path() {
    let mut s = AuthoringSession::new();
    s.start_path(pt(0.0, 0.0));
    let a = s.add_vertex(pt(5.0, 5.0), None).unwrap();
    let b = s.add_vertex(pt(10.0, 0.0), None).unwrap();
    s.delete_vertex(a).unwrap();
    assert!(s.vertex(a).is_none());
    assert_eq!(s.vertex(b).unwrap().id, b);
    let p = s.current_path();
    assert_eq!(p.segments, vec![PathSegment::MoveTo { to: pt(0.0, 0.0) }, PathSegment::LineTo { to: pt(10.0, 0.0) }]);
}

#[test]
fn cancel_discards_progress() {
    let mut s = AuthoringSession::new();
    s.start_path(pt(0.0, 0.0));
    s.add_vertex(pt(1.0, 0.0), None).unwrap();
    s.cancel_path();
    assert_eq!(s.state(), SessionState::Idle);
    assert_eq!(s.vertex_count(), 0);
}

#[test]
fn switching_mirroring_realigns_handles() {
    let mut s = AuthoringSession::new();
    s.start_path(pt(0.0, 0.0));
    let v = s.add_vertex(pt(10.0, 0.0), None).unwrap();
    s.add_vertex(pt(20.0, 0.0), None).unwrap();
    s.move_handle(v, HandleSide::In, pt(10.0, 3.0)).unwrap();
    s.move_handle(v, HandleSide::Out, pt(15.0, 0.0)).unwrap();
    assert_eq!(s.vertex(v).unwrap().handle_in, Some(pt(10.0, 3.0)));

    s.set_mirroring(v, HandleMirroring::Angle).unwrap();
    let vx = s.vertex(v).unwrap();
    assert_eq!(vx.handle_in, Some(pt(7.0, 0.0)));
    assert_eq!(vx.handle_out, Some(pt(15.0, 0.0)));

    s.set_mirroring(v, HandleMirroring::None).unwrap();
    s.move_handle(v, HandleSide::In, pt(10.0, 3.0)).unwrap();
    s.set_mirroring(v, HandleMirroring::AngleAndLength).unwrap();
    let vx = s.vertex(v).unwrap();
    assert_eq!(vx.handle_mirroring, HandleMirroring::AngleAndLength);
    assert_eq!(vx.handle_in, Some(pt(10.0, 3.0)));
    assert_eq!(vx.handle_out, Some(pt(10.0, -3.0)));
}

#[test]
fn lone_out_handle_is_mirrored_on_switch() {
    let mut s = AuthoringSession::new();
    s.start_path(pt(0.0, 0.0));
    let v = s.add_vertex(pt(10.0, 0.0), None).unwrap();
    s.move_handle(v, HandleSide::Out, pt(14.0, 2.0)).unwrap();
    assert_eq!(s.vertex(v).unwrap().handle_in, None);

    s.set_mirroring(v, HandleMirroring::AngleAndLength).unwrap();
    let vx = s.vertex(v).unwrap();
    assert_eq!(vx.handle_in, Some(pt(6.0, -2.0)));
    assert_eq!(vx.handle_out, Some(pt(14.0, 2.0)));
}
