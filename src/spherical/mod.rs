//! Spherical-wavelet subsystem: out of scope except for the tetrahedral
//! subdivision's counting functions, which have closed forms recoverable
//! from the source. See [`tetrahedron`].

pub mod tetrahedron;
