/*!
# `END`

## Purpose
Stop the program successfully.

## Remarks
Running past the last line also ends the program.
Variables keep their values for the host to inspect.

## Example
```text
10 PRINT "HELLO"
20 END
30 PRINT "THIS DOES NOT PRINT"
RUN
HELLO
```

*/
