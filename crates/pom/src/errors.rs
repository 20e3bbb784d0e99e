use thiserror::Error;

#[derive(Error, Debug)]
pub enum PomError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("Malformed POM content: {0}")]
    Malformed(String),

    #[error("Root element is <{0}>, expected <project>")]
    NotAPom(String),

    #[error("POM does not define <{0}>")]
    MissingElement(&'static str),

    #[error("Invalid Maven coordinate '{0}': expected groupId:artifactId[:extension[:classifier]][:version]")]
    InvalidCoordinate(String),
}
