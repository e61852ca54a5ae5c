/// Project identifiers are authored strings (slugs), never derived from position.
pub type ProjectId = String;

/// A media reference (URL or site-relative path) to an image or video.
pub type MediaRef = String;
