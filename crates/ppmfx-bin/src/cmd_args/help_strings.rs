/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static FILTERS_HELP: &str = "Filters (names are case insensitive):
  grayscale, greyscale  Replace each pixel with the mean of its channels
  invert                Replace each channel c with 255-c
  emboss                Gray relief from the top-left diagonal gradient
  motionblur <LENGTH>   Average each pixel with up to LENGTH-1 pixels to its right

Example:
  ppmfx input.ppm out/blurred.ppm motionblur 5";
