mod boundary_properties;
