#[cfg(test)]
mod common;


#[cfg(test)]
mod menu_visibility_tests;

#[cfg(test)]
mod navigate_tests;
