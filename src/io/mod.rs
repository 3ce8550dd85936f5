// Copyright 2020 TwoCookingMice

pub mod text_utils;
