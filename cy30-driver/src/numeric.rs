use crate::error::Cy30Error;

pub(crate) fn parse_fixed_point(digits: &[u8]) -> Result<i64, Cy30Error> {
    let text = std::str::from_utf8(digits)
        .map_err(|_| Cy30Error::InvalidNumeral(to_string(digits)))?;
    text.parse::<i64>()
        .map_err(|_| Cy30Error::InvalidNumeral(text.to_string()))
}

pub(crate) fn to_string(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}
