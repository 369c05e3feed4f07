/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Per-resource page results and the preload payload
pub mod pages;
/// Request models for API calls
pub mod requests;
/// Endpoints of the TDU API
pub mod resource;
/// Envelope decoders for API responses
pub mod responses;
